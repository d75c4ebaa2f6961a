//! Trust scoring.
//!
//! Reduces the fused signals to an ordinal trust label. The scorer is a
//! total, deterministic function with no hidden state; the check order
//! encodes precedence (an unresolvable country and datacenter/VPN suspicion
//! override the corroboration checks).

use serde::Serialize;
use std::fmt;
use strum_macros::EnumIter;

/// Ordinal trust classification of a request's claimed identity/location.
///
/// Ordering: `Unknown < VeryLow < Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum TrustLevel {
    /// The request could not be geolocated at all.
    #[default]
    Unknown,
    /// Datacenter address or VPN/proxy suspicion.
    VeryLow,
    /// Geolocated, but no secondary signal corroborates the country.
    Low,
    /// Exactly one secondary signal corroborates the country.
    Medium,
    /// Timezone and language both corroborate the country.
    High,
}

impl TrustLevel {
    /// Returns the level as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrustLevel::Unknown => "unknown",
            TrustLevel::VeryLow => "very_low",
            TrustLevel::Low => "low",
            TrustLevel::Medium => "medium",
            TrustLevel::High => "high",
        }
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores the fused signals into a [`TrustLevel`].
///
/// Decision order:
/// 1. empty `country` → `Unknown`;
/// 2. datacenter or VPN suspicion → `VeryLow`;
/// 3. timezone and language countries both match (each comparison counts
///    only when the derived value is non-empty) → `High`;
/// 4. exactly one match → `Medium`;
/// 5. otherwise → `Low`.
pub fn score(
    country: &str,
    tz_country: &str,
    lang_country: &str,
    is_datacenter: bool,
    is_vpn_suspect: bool,
) -> TrustLevel {
    if country.is_empty() {
        return TrustLevel::Unknown;
    }
    if is_datacenter || is_vpn_suspect {
        return TrustLevel::VeryLow;
    }

    let same_tz = !tz_country.is_empty() && tz_country == country;
    let same_lang = !lang_country.is_empty() && lang_country == country;

    if same_tz && same_lang {
        return TrustLevel::High;
    }
    if same_tz || same_lang {
        return TrustLevel::Medium;
    }
    TrustLevel::Low
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_scenario_table() {
        assert_eq!(score("", "US", "US", false, false), TrustLevel::Unknown);
        assert_eq!(score("US", "US", "US", false, false), TrustLevel::High);
        assert_eq!(score("US", "US", "", false, false), TrustLevel::Medium);
        assert_eq!(score("US", "GB", "FR", false, false), TrustLevel::Low);
        assert_eq!(score("US", "US", "US", true, false), TrustLevel::VeryLow);
    }

    #[test]
    fn test_vpn_suspicion_forces_very_low() {
        assert_eq!(score("US", "US", "US", false, true), TrustLevel::VeryLow);
    }

    #[test]
    fn test_missing_country_overrides_everything() {
        // An unresolvable country wins even over datacenter/VPN flags.
        assert_eq!(score("", "US", "US", true, true), TrustLevel::Unknown);
    }

    #[test]
    fn test_single_match_from_either_signal() {
        assert_eq!(score("US", "", "US", false, false), TrustLevel::Medium);
        assert_eq!(score("US", "US", "FR", false, false), TrustLevel::Medium);
    }

    #[test]
    fn test_empty_derived_signals_never_count_as_matches() {
        // Empty-vs-empty must not be treated as agreement.
        assert_eq!(score("US", "", "", false, false), TrustLevel::Low);
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            ("US", "US", "US", false, false),
            ("DE", "GB", "", true, false),
            ("", "", "", false, true),
        ];
        for (country, tz, lang, dc, vpn) in inputs {
            let first = score(country, tz, lang, dc, vpn);
            let second = score(country, tz, lang, dc, vpn);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_ordering() {
        assert!(TrustLevel::Unknown < TrustLevel::VeryLow);
        assert!(TrustLevel::VeryLow < TrustLevel::Low);
        assert!(TrustLevel::Low < TrustLevel::Medium);
        assert!(TrustLevel::Medium < TrustLevel::High);
    }

    #[test]
    fn test_all_levels_have_string_representation() {
        for level in TrustLevel::iter() {
            assert!(!level.as_str().is_empty());
        }
        assert_eq!(TrustLevel::VeryLow.as_str(), "very_low");
        assert_eq!(TrustLevel::VeryLow.to_string(), "very_low");
    }

    #[test]
    fn test_serialized_labels_are_snake_case() {
        assert_eq!(
            serde_json::to_value(TrustLevel::VeryLow).unwrap(),
            serde_json::json!("very_low")
        );
        assert_eq!(
            serde_json::to_value(TrustLevel::High).unwrap(),
            serde_json::json!("high")
        );
    }
}
