use colored::*;

use crate::terminal::{colors, gauge, print};
use crate::wprint;
use wrisk_common::config::Config;
use wrisk_common::network::record::{NetworkRecord, RiskTier};
use wrisk_common::network::security::SecurityCategory;
use wrisk_core::analysis::Analyzer;
use wrisk_core::scanner::NullBackend;

use super::scorer_from;

const KEY_WIDTH: usize = 10;

/// Manual-entry path: the category is already canonical, so the
/// pipeline skips classification and goes straight to scoring.
pub fn analyze(name: String, security: SecurityCategory, cfg: &Config) -> anyhow::Result<()> {
    let mut analyzer = Analyzer::new(Box::new(NullBackend), scorer_from(cfg));
    let record = analyzer.analyze(name, security);

    print::header("Risk Analysis", cfg.quiet);
    print_record(&record, cfg);
    Ok(())
}

fn print_record(record: &NetworkRecord, cfg: &Config) {
    let tier: RiskTier = record.tier();
    let tier_color = colors::for_tier(tier);

    let name = if record.name.is_empty() {
        "<hidden network>"
    } else {
        record.name.as_str()
    };

    print::aligned_line("Network", KEY_WIDTH, name.bold());
    print::aligned_line(
        "Security",
        KEY_WIDTH,
        record.security.as_str().color(tier_color),
    );
    print::aligned_line(
        "Risk",
        KEY_WIDTH,
        format!("{} / 100 {}", record.risk_score, tier.symbol),
    );
    print::aligned_line("Level", KEY_WIDTH, tier.label.color(tier_color).bold());

    if cfg.quiet < 2 {
        wprint!();
        gauge::print_gauge(record.risk_score);
        wprint!();
        print::print_status("Possible attacks:");
        for attack in &record.attacks {
            print::print(&format!(
                "   {} {}",
                "-".color(colors::SEPARATOR),
                attack.color(colors::TEXT_DEFAULT)
            ));
        }
    }

    print::end_of_program();
}
