use wrisk_common::error::ScanError;
use wrisk_common::network::observation::NetworkObservation;
use wrisk_common::network::security::SecurityCategory;
use wrisk_core::analysis::{Analyzer, Survey};
use wrisk_core::parser;
use wrisk_core::scanner::{NullBackend, ScanBackend};
use wrisk_core::score::RiskScorer;

/*************************************************************
                Mock backends for pipeline tests
**************************************************************/

/// Backend returning canned delimited output instead of spawning a command.
struct StaticBackend {
    raw: &'static str,
}

impl ScanBackend for StaticBackend {
    fn describe(&self) -> &str {
        "static"
    }

    fn capture(&self) -> Result<String, ScanError> {
        Ok(self.raw.to_string())
    }

    fn parse(&self, raw: &str) -> Vec<NetworkObservation> {
        parser::parse_delimited(raw)
    }
}

/// Backend whose command always fails.
struct FailingBackend;

impl ScanBackend for FailingBackend {
    fn describe(&self) -> &str {
        "failing"
    }

    fn capture(&self) -> Result<String, ScanError> {
        Err(ScanError::CommandFailed {
            command: "nmcli -t -f SSID,SECURITY dev wifi".to_string(),
            detail: "permission denied".to_string(),
        })
    }

    fn parse(&self, raw: &str) -> Vec<NetworkObservation> {
        parser::parse_delimited(raw)
    }
}

fn analyzer(backend: impl ScanBackend + 'static) -> Analyzer {
    Analyzer::new(Box::new(backend), RiskScorer::seeded(1))
}

/*************************************************************
                        Survey routing
**************************************************************/

#[test]
fn survey_detects_networks_from_scan_output() {
    let backend = StaticBackend {
        raw: "MyHome:WPA2\nCafe:\nLegacy:WEP\n",
    };
    let a = analyzer(backend);

    let Survey::Detected(observations) = a.survey() else {
        panic!("expected detected networks");
    };
    assert_eq!(observations.len(), 3);
    assert_eq!(observations[0], NetworkObservation::new("MyHome", "WPA2"));
    assert_eq!(observations[1], NetworkObservation::new("Cafe", ""));
}

#[test]
fn empty_scan_output_falls_back_to_manual_entry() {
    let a = analyzer(StaticBackend { raw: "" });

    match a.survey() {
        Survey::ManualEntry(reason) => assert!(reason.is_none()),
        Survey::Detected(_) => panic!("empty output must not count as analyzed"),
    }
}

#[test]
fn scan_failure_falls_back_to_manual_entry_with_the_reason() {
    let a = analyzer(FailingBackend);

    match a.survey() {
        Survey::ManualEntry(Some(ScanError::CommandFailed { detail, .. })) => {
            assert_eq!(detail, "permission denied");
        }
        _ => panic!("expected manual-entry fallback carrying the failure"),
    }
}

#[test]
fn unsupported_platform_falls_back_to_manual_entry() {
    let a = analyzer(NullBackend);

    match a.survey() {
        Survey::ManualEntry(Some(ScanError::UnsupportedPlatform { .. })) => {}
        _ => panic!("expected unsupported-platform fallback"),
    }
}

/*************************************************************
                  End-to-end record production
**************************************************************/

#[test]
fn scan_to_record_classifies_and_scores_each_observation() {
    let backend = StaticBackend {
        raw: "Home:WPA2\nHotspot:--\nOldRouter:WEP1",
    };
    let mut a = analyzer(backend);

    let Survey::Detected(observations) = a.survey() else {
        panic!("expected detected networks");
    };
    let records: Vec<_> = observations
        .iter()
        .map(|obs| a.analyze_observation(obs))
        .collect();

    assert_eq!(records[0].security, SecurityCategory::Wpa2);
    assert_eq!(records[1].security, SecurityCategory::Open);
    assert_eq!(records[2].security, SecurityCategory::Wep);
    for record in &records {
        assert!(record.risk_score <= 100);
        assert!(!record.attacks.is_empty());
    }
}

#[test]
fn unrecognized_label_yields_a_wpa2_record_with_its_catalog() {
    let backend = StaticBackend {
        raw: "Mystery:SomeProprietaryAuth",
    };
    let mut a = analyzer(backend);

    let Survey::Detected(observations) = a.survey() else {
        panic!("expected detected networks");
    };
    let record = a.analyze_observation(&observations[0]);

    assert_eq!(record.security, SecurityCategory::Wpa2);
    assert!(!record.attacks.is_empty());
    assert!(record.attacks.contains(&"KRACK Attack"));
    // WPA2 base 30, jitter band [-5, +5]
    assert!((25..=35).contains(&record.risk_score));
}

#[test]
fn manual_analysis_skips_classification() {
    let mut a = analyzer(StaticBackend { raw: "" });

    let record = a.analyze("Beach House", SecurityCategory::Open);
    assert_eq!(record.name, "Beach House");
    assert_eq!(record.security, SecurityCategory::Open);
    assert!((85..=95).contains(&record.risk_score));
    assert!(record.attacks.contains(&"Eavesdropping"));
}

#[test]
fn seeded_analyzers_produce_identical_scores() {
    let mut a = analyzer(StaticBackend { raw: "" });
    let mut b = analyzer(StaticBackend { raw: "" });

    for _ in 0..16 {
        let left = a.analyze("x", SecurityCategory::Wpa);
        let right = b.analyze("x", SecurityCategory::Wpa);
        assert_eq!(left.risk_score, right.risk_score);
    }
}
