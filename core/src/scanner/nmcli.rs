use wrisk_common::error::ScanError;
use wrisk_common::network::observation::NetworkObservation;

use crate::parser;
use crate::scanner::{ScanBackend, run_scan_command};

/// Linux backend: `nmcli` in terse mode emits one `SSID:SECURITY`
/// record per line.
pub struct DelimitedRecordBackend;

impl ScanBackend for DelimitedRecordBackend {
    fn describe(&self) -> &str {
        "nmcli"
    }

    fn capture(&self) -> Result<String, ScanError> {
        run_scan_command("nmcli", &["-t", "-f", "SSID,SECURITY", "dev", "wifi"])
    }

    fn parse(&self, raw: &str) -> Vec<NetworkObservation> {
        parser::parse_delimited(raw)
    }
}
