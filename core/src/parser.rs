//! # Scan Output Grammars
//!
//! Turns raw scan-command text into ordered [`NetworkObservation`]s.
//! Two grammars exist, one per backend family:
//!
//! * **Indexed list** — the command emits numbered name lines and
//!   separate authentication lines, paired by position.
//! * **Delimited records** — one self-contained `name:security:...`
//!   record per line.
//!
//! Malformed lines degrade to fewer records, never to an error.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use wrisk_common::network::observation::NetworkObservation;

/// Raw label assigned when an indexed list has more names than
/// authentication entries.
pub const UNKNOWN_LABEL: &str = "Unknown";

static SSID_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SSID \d+ : (.+)").unwrap());
static AUTH_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Authentication\s+:\s+(.+)").unwrap());

/// Parses indexed-list output (`SSID <n> : <name>` / `Authentication : <value>`).
///
/// Names and authentication values are extracted as two independent
/// sequences and paired by position, exactly as emitted. The pairing is
/// order-fragile by construction; backends that emit already-paired
/// records use [`parse_delimited`] instead.
pub fn parse_indexed_list(raw: &str) -> Vec<NetworkObservation> {
    let names: Vec<&str> = SSID_LINE
        .captures_iter(raw)
        .map(|c| c.get(1).map_or("", |m| m.as_str()).trim())
        .collect();
    let auths: Vec<&str> = AUTH_LINE
        .captures_iter(raw)
        .map(|c| c.get(1).map_or("", |m| m.as_str()).trim())
        .collect();

    names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let label = auths.get(i).copied().unwrap_or(UNKNOWN_LABEL);
            NetworkObservation::new(name, label)
        })
        .collect()
}

/// Parses delimited output: one record per line, fields split on `:`.
///
/// Only the first two fields (name, security label) are significant;
/// extras are ignored. Lines with fewer than two fields are dropped
/// silently, so garbled output degrades to fewer records.
pub fn parse_delimited(raw: &str) -> Vec<NetworkObservation> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut fields = line.splitn(3, ':');
            match (fields.next(), fields.next()) {
                (Some(name), Some(label)) => {
                    Some(NetworkObservation::new(name.trim(), label.trim()))
                }
                _ => {
                    debug!("skipping malformed scan line: {line:?}");
                    None
                }
            }
        })
        .collect()
}
