use colored::*;
use wrisk_common::network::record::{NetworkRecord, RiskTier};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

pub fn security_to_detail(record: &NetworkRecord) -> Detail {
    let tier_color = colors::for_tier(record.tier());
    let value = record.security.as_str().color(tier_color);
    ("Security".to_string(), value)
}

pub fn score_to_detail(record: &NetworkRecord) -> Detail {
    let tier: RiskTier = record.tier();
    let tier_color = colors::for_tier(tier);
    let score = format!("{} / 100", record.risk_score).color(tier_color);
    let value = format!("{} {} {}", score, tier.symbol, tier.label.color(tier_color));
    ("Risk".to_string(), value.normal())
}

pub fn attacks_to_detail(record: &NetworkRecord) -> Detail {
    let joined: String = record.attacks.join(", ");
    ("Attacks".to_string(), joined.color(colors::TEXT_DEFAULT))
}
