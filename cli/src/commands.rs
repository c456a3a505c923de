pub mod analyze;
pub mod scan;

use clap::{Parser, Subcommand};
use wrisk_common::config::Config;
use wrisk_common::network::security::SecurityCategory;
use wrisk_core::score::RiskScorer;

#[derive(Parser)]
#[command(name = "wrisk")]
#[command(about = "A wifi risk analyzer.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output. Repeat for results only.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Fix the risk-score jitter seed for reproducible output.
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan for nearby networks and assess each one
    #[command(alias = "s")]
    Scan,
    /// Assess a single network supplied by hand
    #[command(alias = "a")]
    Analyze {
        /// Network name (SSID)
        name: String,
        /// Security category: Open, WEP, WPA, WPA2 or WPA3
        #[arg(short, long)]
        security: SecurityCategory,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Entropy-seeded scorer unless the run pinned a jitter seed.
pub(crate) fn scorer_from(cfg: &Config) -> RiskScorer {
    match cfg.seed {
        Some(seed) => RiskScorer::seeded(seed),
        None => RiskScorer::from_entropy(),
    }
}
