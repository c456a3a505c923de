//! # Canonical Security Categories
//!
//! The closed set of authentication schemes the engine reasons about.
//! Every raw label a scan produces collapses into one of these five;
//! there is no "unknown" terminal category.

use std::fmt;
use std::str::FromStr;

/// A wireless network's canonical security protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityCategory {
    Open,
    Wep,
    Wpa,
    Wpa2,
    Wpa3,
}

impl SecurityCategory {
    /// Canonical display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityCategory::Open => "Open",
            SecurityCategory::Wep => "WEP",
            SecurityCategory::Wpa => "WPA",
            SecurityCategory::Wpa2 => "WPA2",
            SecurityCategory::Wpa3 => "WPA3",
        }
    }
}

impl fmt::Display for SecurityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SecurityCategory {
    type Err = String;

    /// Strict parse for user-supplied input (manual entry).
    ///
    /// Accepts exactly the five canonical labels, case-insensitively.
    /// Free-form scan labels go through the lenient classifier instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "open" => Ok(SecurityCategory::Open),
            "wep" => Ok(SecurityCategory::Wep),
            "wpa" => Ok(SecurityCategory::Wpa),
            "wpa2" => Ok(SecurityCategory::Wpa2),
            "wpa3" => Ok(SecurityCategory::Wpa3),
            _ => Err(format!(
                "invalid security category: {s} (expected one of Open, WEP, WPA, WPA2, WPA3)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_labels_case_insensitively() {
        assert_eq!("wpa2".parse::<SecurityCategory>().unwrap(), SecurityCategory::Wpa2);
        assert_eq!("OPEN".parse::<SecurityCategory>().unwrap(), SecurityCategory::Open);
        assert_eq!("Wpa3".parse::<SecurityCategory>().unwrap(), SecurityCategory::Wpa3);
    }

    #[test]
    fn rejects_free_form_labels() {
        assert!("WPA2-Personal".parse::<SecurityCategory>().is_err());
        assert!("".parse::<SecurityCategory>().is_err());
    }
}
