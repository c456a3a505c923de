use thiserror::Error;

/// Failures of the platform scan step.
///
/// Both variants are recoverable: the pipeline falls back to manual
/// entry instead of aborting.
#[derive(Debug, Error)]
pub enum ScanError {
    /// No scan backend exists for the host operating system.
    #[error("wifi scanning is not supported on {os}")]
    UnsupportedPlatform { os: String },

    /// The scan command is missing, was denied, or exited non-zero.
    #[error("scan command `{command}` failed: {detail}")]
    CommandFailed { command: String, detail: String },
}
