//! GeoIP data structures.
//!
//! This module defines the record produced by IP lookups and the field-level
//! merge rule used to combine answers from partially-overlapping databases.

use serde::Serialize;

/// Structured location/network data for a single IP lookup.
///
/// Every field other than `ip` is absent-capable; a lookup miss yields a
/// record with only `ip` populated. Serialized field names follow the wire
/// format of the enrichment result (`camelCase`).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoRecord {
    /// The IP address the lookup was performed for (as received).
    pub ip: String,
    /// ISO country code of the resolved location.
    pub country: Option<String>,
    /// ISO code of the country the network is registered in.
    pub registered_country: Option<String>,
    /// ISO code of the country the network represents (e.g. embassies).
    pub represented_country: Option<String>,
    /// Continent code.
    pub continent: Option<String>,
    /// City name.
    pub city: Option<String>,
    /// Region/subdivision name.
    pub region: Option<String>,
    /// Region/subdivision ISO code.
    pub region_code: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
    /// Latitude of the resolved location.
    pub latitude: Option<f64>,
    /// Longitude of the resolved location.
    pub longitude: Option<f64>,
    /// Location accuracy radius; larger means a less precise fix.
    pub accuracy_radius: Option<u16>,
    /// US metro code, where the database provides one.
    pub metro_code: Option<u16>,
    /// IANA timezone name of the resolved location.
    pub timezone: Option<String>,
    /// Network organization name.
    pub organization: Option<String>,
    /// Autonomous system number.
    pub asn: Option<u32>,
    /// Autonomous system organization name.
    pub asn_org: Option<String>,
    /// Whether the database marks this network as an anonymous proxy.
    pub is_anonymous_proxy: bool,
    /// Whether the database marks this network as a satellite provider.
    pub is_satellite_provider: bool,
}

impl GeoRecord {
    /// Creates an empty record for the given IP address.
    pub fn for_ip(ip: impl Into<String>) -> Self {
        Self {
            ip: ip.into(),
            ..Default::default()
        }
    }

    /// Returns the resolved country code, or `""` when absent.
    pub fn country_code(&self) -> &str {
        self.country.as_deref().unwrap_or("")
    }

    /// Merges a later, more specific lookup answer into this record.
    ///
    /// Precedence rules, spelled out per field:
    /// - text and numeric fields: the overlay wins only when it actually
    ///   carries a value (an empty answer never blanks out an earlier one);
    /// - `continent`: filled by whichever source answers first, overwritten
    ///   only while still empty;
    /// - proxy/satellite flags: OR'd across sources;
    /// - `ip`: always kept from the base record.
    pub fn merge_from(&mut self, overlay: GeoRecord) {
        fill_text(&mut self.country, overlay.country);
        fill_text(&mut self.registered_country, overlay.registered_country);
        fill_text(&mut self.represented_country, overlay.represented_country);
        if self.continent.as_deref().map_or(true, str::is_empty) {
            fill_text(&mut self.continent, overlay.continent);
        }
        fill_text(&mut self.city, overlay.city);
        fill_text(&mut self.region, overlay.region);
        fill_text(&mut self.region_code, overlay.region_code);
        fill_text(&mut self.postal_code, overlay.postal_code);
        fill_text(&mut self.timezone, overlay.timezone);
        fill_text(&mut self.organization, overlay.organization);
        fill_text(&mut self.asn_org, overlay.asn_org);
        fill_value(&mut self.latitude, overlay.latitude);
        fill_value(&mut self.longitude, overlay.longitude);
        fill_value(&mut self.accuracy_radius, overlay.accuracy_radius);
        fill_value(&mut self.metro_code, overlay.metro_code);
        fill_value(&mut self.asn, overlay.asn);
        self.is_anonymous_proxy |= overlay.is_anonymous_proxy;
        self.is_satellite_provider |= overlay.is_satellite_provider;
    }
}

/// Replaces `dst` only when the overlay carries a non-empty string.
fn fill_text(dst: &mut Option<String>, src: Option<String>) {
    if let Some(value) = src {
        if !value.is_empty() {
            *dst = Some(value);
        }
    }
}

/// Replaces `dst` only when the overlay carries a value.
fn fill_value<T>(dst: &mut Option<T>, src: Option<T>) {
    if src.is_some() {
        *dst = src;
    }
}
