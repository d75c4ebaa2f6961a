//! Timezone to country mapping.
//!
//! A static table from IANA timezone identifiers to 2-letter country codes.
//! The table is injected into the header extractor so alternate tables are
//! testable; unknown zones resolve to an empty string, never an error.

use std::collections::HashMap;

/// Built-in timezone→country entries, covering the common IANA zones.
/// Zones that span several countries map to the most populous user base;
/// anything off-table yields an empty country.
const TIMEZONE_COUNTRIES: &[(&str, &str)] = &[
    // Europe
    ("Europe/Amsterdam", "NL"),
    ("Europe/Athens", "GR"),
    ("Europe/Berlin", "DE"),
    ("Europe/Brussels", "BE"),
    ("Europe/Bucharest", "RO"),
    ("Europe/Budapest", "HU"),
    ("Europe/Copenhagen", "DK"),
    ("Europe/Dublin", "IE"),
    ("Europe/Helsinki", "FI"),
    ("Europe/Istanbul", "TR"),
    ("Europe/Kyiv", "UA"),
    ("Europe/Lisbon", "PT"),
    ("Europe/London", "GB"),
    ("Europe/Madrid", "ES"),
    ("Europe/Moscow", "RU"),
    ("Europe/Oslo", "NO"),
    ("Europe/Paris", "FR"),
    ("Europe/Prague", "CZ"),
    ("Europe/Rome", "IT"),
    ("Europe/Stockholm", "SE"),
    ("Europe/Vienna", "AT"),
    ("Europe/Warsaw", "PL"),
    ("Europe/Zurich", "CH"),
    // Americas
    ("America/Argentina/Buenos_Aires", "AR"),
    ("America/Bogota", "CO"),
    ("America/Chicago", "US"),
    ("America/Denver", "US"),
    ("America/Lima", "PE"),
    ("America/Los_Angeles", "US"),
    ("America/Mexico_City", "MX"),
    ("America/New_York", "US"),
    ("America/Phoenix", "US"),
    ("America/Santiago", "CL"),
    ("America/Sao_Paulo", "BR"),
    ("America/Toronto", "CA"),
    ("America/Vancouver", "CA"),
    // Asia
    ("Asia/Bangkok", "TH"),
    ("Asia/Dhaka", "BD"),
    ("Asia/Dubai", "AE"),
    ("Asia/Hong_Kong", "HK"),
    ("Asia/Jakarta", "ID"),
    ("Asia/Jerusalem", "IL"),
    ("Asia/Karachi", "PK"),
    ("Asia/Kolkata", "IN"),
    ("Asia/Kuala_Lumpur", "MY"),
    ("Asia/Manila", "PH"),
    ("Asia/Riyadh", "SA"),
    ("Asia/Seoul", "KR"),
    ("Asia/Shanghai", "CN"),
    ("Asia/Singapore", "SG"),
    ("Asia/Taipei", "TW"),
    ("Asia/Tehran", "IR"),
    ("Asia/Tokyo", "JP"),
    // Africa
    ("Africa/Cairo", "EG"),
    ("Africa/Johannesburg", "ZA"),
    ("Africa/Lagos", "NG"),
    ("Africa/Nairobi", "KE"),
    // Oceania
    ("Australia/Melbourne", "AU"),
    ("Australia/Sydney", "AU"),
    ("Pacific/Auckland", "NZ"),
];

/// Read-only timezone→country lookup table.
#[derive(Debug, Clone)]
pub struct TimezoneTable {
    entries: HashMap<String, String>,
}

impl TimezoneTable {
    /// Builds the built-in table.
    pub fn builtin() -> Self {
        Self::from_pairs(TIMEZONE_COUNTRIES)
    }

    /// Builds a table from explicit pairs, for tests and custom deployments.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let entries = pairs
            .iter()
            .map(|(tz, country)| (tz.to_string(), country.to_string()))
            .collect();
        Self { entries }
    }

    /// Best-effort country implied by a declared timezone name.
    ///
    /// Unknown or empty timezones yield `""`.
    pub fn country_for(&self, timezone: &str) -> String {
        if timezone.is_empty() {
            return String::new();
        }
        self.entries.get(timezone).cloned().unwrap_or_default()
    }
}

impl Default for TimezoneTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_timezones() {
        let table = TimezoneTable::builtin();
        assert_eq!(table.country_for("Europe/Berlin"), "DE");
        assert_eq!(table.country_for("Europe/London"), "GB");
        assert_eq!(table.country_for("America/New_York"), "US");
        assert_eq!(table.country_for("America/Los_Angeles"), "US");
        assert_eq!(table.country_for("Asia/Karachi"), "PK");
        assert_eq!(table.country_for("Asia/Kolkata"), "IN");
    }

    #[test]
    fn test_unknown_timezone_yields_empty() {
        let table = TimezoneTable::builtin();
        assert_eq!(table.country_for("Mars/Colony"), "");
        assert_eq!(table.country_for("europe/berlin"), ""); // case-sensitive, as declared
    }

    #[test]
    fn test_empty_timezone_yields_empty() {
        let table = TimezoneTable::builtin();
        assert_eq!(table.country_for(""), "");
    }

    #[test]
    fn test_alternate_table_injection() {
        let table = TimezoneTable::from_pairs(&[("Test/Zone", "XX")]);
        assert_eq!(table.country_for("Test/Zone"), "XX");
        assert_eq!(table.country_for("Europe/Berlin"), "");
    }
}
