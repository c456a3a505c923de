use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while the blocking scan command runs. The engine
/// defines no timeout, so this is the only feedback during the wait.
pub fn start_scan_spinner(backend: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg}")
        .expect("static spinner template")
        .tick_strings(&[
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);

    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!("Scanning for networks via {backend}..."));
    pb
}
