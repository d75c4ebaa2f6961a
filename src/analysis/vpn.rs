//! VPN/proxy suspicion heuristic.
//!
//! Combines network-organization text, cross-signal country mismatches and
//! location precision into a single boolean. Datacenter membership is
//! deliberately not an input here: it reaches the trust scorer as an
//! independent signal, keeping the two composable and separately testable.

use crate::config::{DEFAULT_ACCURACY_RADIUS_THRESHOLD, DEFAULT_VPN_ORG_KEYWORDS};
use crate::geoip::GeoRecord;
use crate::signals::HeaderSignals;

/// VPN/proxy suspicion heuristic with its injected rule table.
#[derive(Debug, Clone)]
pub struct VpnHeuristic {
    org_keywords: Vec<String>,
    accuracy_radius_threshold: u16,
}

impl VpnHeuristic {
    /// Creates a heuristic with an explicit keyword table and threshold.
    /// Keywords are matched case-insensitively; they are normalized to
    /// lowercase here, once.
    pub fn new<I, S>(org_keywords: I, accuracy_radius_threshold: u16) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            org_keywords: org_keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
            accuracy_radius_threshold,
        }
    }

    /// Creates a heuristic with the built-in keyword list and the given
    /// accuracy-radius threshold.
    pub fn with_defaults(accuracy_radius_threshold: u16) -> Self {
        Self::new(
            DEFAULT_VPN_ORG_KEYWORDS.iter().copied(),
            accuracy_radius_threshold,
        )
    }

    /// Returns true if any suspicion condition holds:
    /// organization-name keyword match, country↔timezone mismatch,
    /// country↔language mismatch, or an accuracy radius above the threshold.
    pub fn is_suspect(&self, geo: &GeoRecord, signals: &HeaderSignals) -> bool {
        let asn_org = geo.asn_org.as_deref().unwrap_or("").to_lowercase();
        let organization = geo.organization.as_deref().unwrap_or("").to_lowercase();
        for keyword in &self.org_keywords {
            if asn_org.contains(keyword) || organization.contains(keyword) {
                return true;
            }
        }

        // Country mismatches only count when both sides carry a value.
        let country = geo.country_code();
        if !country.is_empty() {
            if !signals.tz_country.is_empty() && signals.tz_country != country {
                return true;
            }
            if !signals.lang_country.is_empty() && signals.lang_country != country {
                return true;
            }
        }

        // A coarse fix is typical of relay infrastructure.
        if let Some(radius) = geo.accuracy_radius {
            if radius > self.accuracy_radius_threshold {
                return true;
            }
        }

        false
    }
}

impl Default for VpnHeuristic {
    fn default() -> Self {
        Self::with_defaults(DEFAULT_ACCURACY_RADIUS_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_record() -> GeoRecord {
        GeoRecord {
            country: Some("US".to_string()),
            accuracy_radius: Some(10),
            asn: Some(7922),
            asn_org: Some("COMCAST-7922".to_string()),
            ..GeoRecord::for_ip("203.0.113.5")
        }
    }

    fn matching_signals() -> HeaderSignals {
        HeaderSignals {
            tz_country: "US".to_string(),
            lang_country: "US".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_record_is_not_suspect() {
        let heuristic = VpnHeuristic::default();
        assert!(!heuristic.is_suspect(&clean_record(), &matching_signals()));
    }

    #[test]
    fn test_hosting_org_triggers_regardless_of_other_fields() {
        let heuristic = VpnHeuristic::default();
        let mut record = clean_record();
        record.asn_org = Some("AMAZON TECHNOLOGIES INC".to_string());
        assert!(heuristic.is_suspect(&record, &matching_signals()));
    }

    #[test]
    fn test_network_organization_field_also_matched() {
        let heuristic = VpnHeuristic::default();
        let mut record = clean_record();
        record.organization = Some("NordVPN S.A.".to_string());
        assert!(heuristic.is_suspect(&record, &matching_signals()));
    }

    #[test]
    fn test_timezone_country_mismatch_triggers() {
        let heuristic = VpnHeuristic::default();
        let mut signals = matching_signals();
        signals.tz_country = "GB".to_string();
        assert!(heuristic.is_suspect(&clean_record(), &signals));
    }

    #[test]
    fn test_language_country_mismatch_triggers() {
        let heuristic = VpnHeuristic::default();
        let mut signals = matching_signals();
        signals.lang_country = "FR".to_string();
        assert!(heuristic.is_suspect(&clean_record(), &signals));
    }

    #[test]
    fn test_empty_derived_signals_do_not_count() {
        let heuristic = VpnHeuristic::default();
        let signals = HeaderSignals::default();
        assert!(!heuristic.is_suspect(&clean_record(), &signals));
    }

    #[test]
    fn test_empty_country_disables_mismatch_checks() {
        let heuristic = VpnHeuristic::default();
        let mut record = clean_record();
        record.country = None;
        record.asn_org = None;
        let mut signals = matching_signals();
        signals.tz_country = "GB".to_string();
        assert!(!heuristic.is_suspect(&record, &signals));
    }

    #[test]
    fn test_accuracy_radius_threshold_is_strict() {
        let heuristic = VpnHeuristic::with_defaults(500);
        let mut record = clean_record();

        record.accuracy_radius = Some(500);
        assert!(!heuristic.is_suspect(&record, &matching_signals()));

        record.accuracy_radius = Some(501);
        assert!(heuristic.is_suspect(&record, &matching_signals()));
    }

    #[test]
    fn test_keyword_table_is_injectable() {
        let heuristic = VpnHeuristic::new(["examplenet"], 500);
        let mut record = clean_record();
        record.asn_org = Some("EXAMPLENET LLC".to_string());
        assert!(heuristic.is_suspect(&record, &matching_signals()));

        // The Amazon default is gone from this table
        record.asn_org = Some("AMAZON TECHNOLOGIES INC".to_string());
        assert!(!heuristic.is_suspect(&record, &matching_signals()));
    }
}
