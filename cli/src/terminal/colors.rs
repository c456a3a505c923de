use colored::Color;
use wrisk_common::network::record::RiskTier;

pub const PRIMARY: Color = Color::BrightCyan;
pub const ACCENT: Color = Color::BrightGreen;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

/// Tier band colors matching the gauge: green, orange, red.
pub const RISK_LOW: Color = Color::Green;
pub const RISK_MEDIUM: Color = Color::Yellow;
pub const RISK_HIGH: Color = Color::Red;

pub fn for_tier(tier: RiskTier) -> Color {
    match tier.color {
        "green" => RISK_LOW,
        "orange" => RISK_MEDIUM,
        _ => RISK_HIGH,
    }
}
