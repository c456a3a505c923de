//! # Risk Scoring
//!
//! Maps a canonical security category to a heuristic risk score and its
//! attack catalog. The score carries a small random jitter for display
//! variety; the generator is injected so scoring stays reproducible in
//! tests and owns no process-global state.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use wrisk_common::network::security::SecurityCategory;

/// Heuristic base exposure per category, before jitter.
pub fn base_score(category: SecurityCategory) -> i32 {
    match category {
        SecurityCategory::Open => 90,
        SecurityCategory::Wep => 75,
        SecurityCategory::Wpa => 50,
        SecurityCategory::Wpa2 => 30,
        SecurityCategory::Wpa3 => 10,
    }
}

/// Plausible attack techniques per category. Fixed order, never empty.
pub fn attack_catalog(category: SecurityCategory) -> &'static [&'static str] {
    match category {
        SecurityCategory::Open => &[
            "Eavesdropping",
            "Data Theft",
            "Man-in-the-Middle (MITM)",
            "Session Hijacking",
        ],
        SecurityCategory::Wep => &[
            "Weak Encryption Crack",
            "Replay Attacks",
            "Packet Injection",
            "ARP Spoofing",
        ],
        SecurityCategory::Wpa => &[
            "Dictionary Attacks",
            "Brute Force Password Attack",
            "Handshake Capture",
            "Evil Twin Attack",
        ],
        SecurityCategory::Wpa2 => &[
            "KRACK Attack",
            "Weak Password Brute Force",
            "Handshake Capture",
            "Rogue Access Point",
        ],
        SecurityCategory::Wpa3 => &[
            "Side-channel Attack (rare)",
            "Implementation Bugs",
            "Downgrade Attack",
            "Dragonblood Attack",
        ],
    }
}

/// Produces risk scores with bounded jitter over a caller-owned generator.
pub struct RiskScorer<R: Rng = StdRng> {
    rng: R,
}

impl RiskScorer<StdRng> {
    /// Scorer seeded from the operating system. The usual choice outside tests.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Scorer with a fixed seed for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RiskScorer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Scores one category: base score plus a uniform jitter in `[-5, +5]`,
    /// clamped into `[0, 100]`, paired with the category's attack catalog.
    pub fn score(&mut self, category: SecurityCategory) -> (u8, &'static [&'static str]) {
        let jitter: i32 = self.rng.random_range(-5..=5);
        let score = (base_score(category) + jitter).clamp(0, 100) as u8;
        (score, attack_catalog(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CATEGORIES: [SecurityCategory; 5] = [
        SecurityCategory::Open,
        SecurityCategory::Wep,
        SecurityCategory::Wpa,
        SecurityCategory::Wpa2,
        SecurityCategory::Wpa3,
    ];

    #[test]
    fn scores_stay_within_the_jitter_band_and_global_bounds() {
        let mut scorer = RiskScorer::seeded(7);
        for category in ALL_CATEGORIES {
            let base = base_score(category);
            for _ in 0..1000 {
                let (score, _) = scorer.score(category);
                assert!(score <= 100);
                let score = i32::from(score);
                assert!(score >= (base - 5).max(0), "{category}: {score} below band");
                assert!(score <= (base + 5).min(100), "{category}: {score} above band");
            }
        }
    }

    #[test]
    fn jitter_actually_varies() {
        let mut scorer = RiskScorer::seeded(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            let (score, _) = scorer.score(SecurityCategory::Wpa);
            seen.insert(score);
        }
        assert!(seen.len() >= 2, "1000 scores were all identical");
    }

    #[test]
    fn same_seed_gives_the_same_sequence() {
        let mut a = RiskScorer::seeded(99);
        let mut b = RiskScorer::seeded(99);
        for category in ALL_CATEGORIES {
            assert_eq!(a.score(category), b.score(category));
        }
    }

    #[test]
    fn every_catalog_is_non_empty() {
        for category in ALL_CATEGORIES {
            assert!(!attack_catalog(category).is_empty());
        }
    }
}
