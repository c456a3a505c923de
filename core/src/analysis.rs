//! # Network Risk Analysis Service
//!
//! Implements the core "analyze a network" use case.
//!
//! Orchestrates the pipeline: scan backend, output grammar, security
//! classification, risk scoring. One [`NetworkRecord`] per network,
//! created fresh per call; nothing persists between invocations.

use tracing::warn;

use wrisk_common::error::ScanError;
use wrisk_common::network::observation::NetworkObservation;
use wrisk_common::network::record::NetworkRecord;
use wrisk_common::network::security::SecurityCategory;

use crate::classify;
use crate::scanner::ScanBackend;
use crate::score::RiskScorer;

/// Outcome of surveying the airspace.
///
/// A failed scan and a scan that saw nothing both route the caller to
/// manual entry; neither aborts the run.
pub enum Survey {
    /// At least one network was observed.
    Detected(Vec<NetworkObservation>),
    /// Nothing usable came back; the caller should ask the user for a
    /// network instead. Carries the scan failure when there was one.
    ManualEntry(Option<ScanError>),
}

/// Application service tying a scan backend to the classifier and scorer.
pub struct Analyzer {
    backend: Box<dyn ScanBackend>,
    scorer: RiskScorer,
}

impl Analyzer {
    pub fn new(backend: Box<dyn ScanBackend>, scorer: RiskScorer) -> Self {
        Self { backend, scorer }
    }

    /// Runs the platform scan and parses its output.
    pub fn survey(&self) -> Survey {
        let raw = match self.backend.capture() {
            Ok(raw) => raw,
            Err(e) => {
                warn!("scan via {} failed: {e}", self.backend.describe());
                return Survey::ManualEntry(Some(e));
            }
        };

        let observations = self.backend.parse(&raw);
        if observations.is_empty() {
            return Survey::ManualEntry(None);
        }
        Survey::Detected(observations)
    }

    /// Classifies and scores one observation from a scan.
    pub fn analyze_observation(&mut self, observation: &NetworkObservation) -> NetworkRecord {
        let security = classify::classify(&observation.raw_security);
        self.record(observation.name.clone(), security)
    }

    /// Scores a manually supplied network. The category is already
    /// canonical, so classification is skipped.
    pub fn analyze(&mut self, name: impl Into<String>, security: SecurityCategory) -> NetworkRecord {
        self.record(name.into(), security)
    }

    fn record(&mut self, name: String, security: SecurityCategory) -> NetworkRecord {
        let (risk_score, attacks) = self.scorer.score(security);
        NetworkRecord {
            name,
            security,
            risk_score,
            attacks: attacks.to_vec(),
        }
    }
}
