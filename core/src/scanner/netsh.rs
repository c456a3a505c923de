use wrisk_common::error::ScanError;
use wrisk_common::network::observation::NetworkObservation;

use crate::parser;
use crate::scanner::{ScanBackend, run_scan_command};

/// Windows backend: `netsh` emits numbered SSID lines and separate
/// authentication lines, paired positionally by the grammar.
pub struct IndexedListBackend;

impl ScanBackend for IndexedListBackend {
    fn describe(&self) -> &str {
        "netsh"
    }

    fn capture(&self) -> Result<String, ScanError> {
        run_scan_command("netsh", &["wlan", "show", "networks", "mode=Bssid"])
    }

    fn parse(&self, raw: &str) -> Vec<NetworkObservation> {
        parser::parse_indexed_list(raw)
    }
}
