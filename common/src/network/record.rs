//! # Analysis Result Model
//!
//! The engine's sole output type and the discrete risk tiers derived
//! from its score.

use crate::network::security::SecurityCategory;

/// The fully analyzed view of one network: canonical security, a risk
/// score in `[0, 100]` and the attack catalog for that category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkRecord {
    pub name: String,
    pub security: SecurityCategory,
    pub risk_score: u8,
    pub attacks: Vec<&'static str>,
}

/// Discrete risk tier with display metadata, derived from the score alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskTier {
    pub label: &'static str,
    pub color: &'static str,
    pub symbol: &'static str,
}

pub const LOW_RISK: RiskTier = RiskTier {
    label: "Low Risk",
    color: "green",
    symbol: "🟢",
};

pub const MEDIUM_RISK: RiskTier = RiskTier {
    label: "Medium Risk",
    color: "orange",
    symbol: "🟡",
};

pub const HIGH_RISK: RiskTier = RiskTier {
    label: "High Risk",
    color: "red",
    symbol: "🔴",
};

impl RiskTier {
    /// Maps a score to its tier: `<=30` low, `<=70` medium, above high.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=30 => LOW_RISK,
            31..=70 => MEDIUM_RISK,
            _ => HIGH_RISK,
        }
    }
}

impl NetworkRecord {
    pub fn tier(&self) -> RiskTier {
        RiskTier::from_score(self.risk_score)
    }
}
