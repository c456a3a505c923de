pub mod config;
pub mod error;
pub mod network;

#[doc(hidden)]
pub use tracing;

/// Logs an informational message through tracing.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

/// Logs a warning through tracing.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

/// Logs a success message. Rendered with its own symbol by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: "wrisk::success", $($arg)*)
    };
}
