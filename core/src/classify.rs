//! # Security Label Classifier
//!
//! Collapses the free-form security label a scan emits into one of the
//! five canonical categories. Matching is case-insensitive substring
//! matching in a fixed precedence order.

use wrisk_common::network::security::SecurityCategory;

/// Classifies a raw, platform-specific security label.
///
/// Precedence is load-bearing: "wpa3" and "wpa2" both contain "wpa", so
/// the more specific substrings must be tested first. Anything
/// unrecognized falls back to `WPA2`.
pub fn classify(raw: &str) -> SecurityCategory {
    let label = raw.to_ascii_lowercase();

    if label.is_empty() || label == "--" || label.contains("open") {
        return SecurityCategory::Open;
    }
    if label.contains("wep") {
        return SecurityCategory::Wep;
    }
    if label.contains("wpa3") {
        return SecurityCategory::Wpa3;
    }
    if label.contains("wpa2") {
        return SecurityCategory::Wpa2;
    }
    if label.contains("wpa") {
        return SecurityCategory::Wpa;
    }

    SecurityCategory::Wpa2
}
