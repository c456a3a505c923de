//! The central **abstraction** over platform wifi enumeration.
//!
//! A [`ScanBackend`] pairs a platform's native scan command with the
//! grammar its output speaks. High-level modules depend on this trait
//! only; the concrete strategy is injected at construction time, so the
//! engine never inspects the running environment itself and each
//! grammar can be tested in isolation.

use std::process::Command;

use wrisk_common::error::ScanError;
use wrisk_common::network::observation::NetworkObservation;

mod netsh;
mod nmcli;

pub use netsh::IndexedListBackend;
pub use nmcli::DelimitedRecordBackend;

/// One platform's wifi enumeration strategy: command plus grammar.
pub trait ScanBackend {
    /// Human-readable backend name for logs and error messages.
    fn describe(&self) -> &str;

    /// Runs the scan command and captures its standard output.
    fn capture(&self) -> Result<String, ScanError>;

    /// Parses captured output into observations, order preserved.
    fn parse(&self, raw: &str) -> Vec<NetworkObservation>;
}

/// Backend for hosts with no scan support. Always fails recoverably,
/// which routes the pipeline to manual entry.
pub struct NullBackend;

impl ScanBackend for NullBackend {
    fn describe(&self) -> &str {
        "none"
    }

    fn capture(&self) -> Result<String, ScanError> {
        Err(ScanError::UnsupportedPlatform {
            os: std::env::consts::OS.to_string(),
        })
    }

    fn parse(&self, _raw: &str) -> Vec<NetworkObservation> {
        Vec::new()
    }
}

/// Selects the backend for the build target's operating system.
pub fn for_host() -> Box<dyn ScanBackend> {
    #[cfg(target_os = "windows")]
    {
        Box::new(IndexedListBackend)
    }
    #[cfg(target_os = "linux")]
    {
        Box::new(DelimitedRecordBackend)
    }
    #[cfg(not(any(target_os = "windows", target_os = "linux")))]
    {
        Box::new(NullBackend)
    }
}

/// Spawns a scan command and captures stdout. Spawn failures and
/// non-zero exits both surface as [`ScanError::CommandFailed`].
fn run_scan_command(program: &str, args: &[&str]) -> Result<String, ScanError> {
    let rendered = if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    };

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| ScanError::CommandFailed {
            command: rendered.clone(),
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let detail = match stderr.trim() {
            "" => output.status.to_string(),
            msg => msg.to_string(),
        };
        return Err(ScanError::CommandFailed {
            command: rendered,
            detail,
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
