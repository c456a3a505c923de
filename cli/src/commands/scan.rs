use std::time::{Duration, Instant};

use colored::*;

use crate::terminal::{format, print, spinner};
use crate::wprint;
use wrisk_common::network::record::NetworkRecord;
use wrisk_common::{config::Config, success, warn};
use wrisk_core::analysis::{Analyzer, Survey};
use wrisk_core::scanner;
use wrisk_core::score::RiskScorer;

use super::scorer_from;

pub fn scan(cfg: &Config) -> anyhow::Result<()> {
    let backend = scanner::for_host();
    let backend_name: String = backend.describe().to_string();
    let scorer: RiskScorer = scorer_from(cfg);
    let mut analyzer = Analyzer::new(backend, scorer);

    let pb = spinner::start_scan_spinner(&backend_name);
    let start_time: Instant = Instant::now();
    let survey = analyzer.survey();
    pb.finish_and_clear();

    match survey {
        Survey::Detected(observations) => {
            let records: Vec<NetworkRecord> = observations
                .iter()
                .map(|obs| analyzer.analyze_observation(obs))
                .collect();
            scan_ends(&records, start_time.elapsed(), cfg);
        }
        Survey::ManualEntry(reason) => {
            if let Some(e) = reason {
                warn!("{e}");
            }
            no_networks_found(cfg);
        }
    }

    Ok(())
}

fn scan_ends(records: &[NetworkRecord], total_time: Duration, cfg: &Config) {
    if cfg.quiet > 0 {
        wprint!();
    }

    print::header("Network Risk Survey", cfg.quiet);
    print_records(records, cfg);
    print_summary(records, total_time, cfg);
}

fn no_networks_found(cfg: &Config) {
    print::header("ZERO NETWORKS DETECTED", cfg.quiet);
    warn!("No networks observed; the scan may be unsupported here.");
    print::print_status(format!(
        "Assess one by hand: {}",
        "wrisk analyze <NAME> --security <CATEGORY>".bold()
    ));
}

fn print_records(records: &[NetworkRecord], cfg: &Config) {
    for (idx, record) in records.iter().enumerate() {
        match cfg.quiet {
            2.. => {}
            _ => print_record_tree(record, idx, cfg),
        }
        if idx + 1 != records.len() && cfg.quiet < 2 {
            wprint!();
        }
    }
}

fn print_record_tree(record: &NetworkRecord, idx: usize, cfg: &Config) {
    let name = if record.name.is_empty() {
        "<hidden network>"
    } else {
        record.name.as_str()
    };
    print::tree_head(idx, name);

    let mut details: Vec<format::Detail> = vec![
        format::security_to_detail(record),
        format::score_to_detail(record),
    ];

    // Full attack catalogs only at the default verbosity.
    if cfg.quiet == 0 {
        details.push(format::attacks_to_detail(record));
    }

    print::as_tree_one_level(details);
}

fn print_summary(records: &[NetworkRecord], total_time: Duration, cfg: &Config) {
    let riskiest: Option<&NetworkRecord> = records.iter().max_by_key(|r| r.risk_score);

    let count: ColoredString = format!("{} networks", records.len()).bold().green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: String = match riskiest {
        Some(record) => {
            let tier = record.tier();
            format!(
                "Survey complete: {count} assessed in {total_time}, highest risk {} {}",
                record.risk_score, tier.symbol
            )
        }
        None => format!("Survey complete: {count} assessed in {total_time}"),
    };

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            wprint!();
            success!("{}", output);
        }
    }
}
