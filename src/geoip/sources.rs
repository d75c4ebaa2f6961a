//! Multi-database IP resolution.
//!
//! This module owns the loaded MaxMind readers and implements the lookup
//! sequence: Country, then City, then ASN, each contributing a partial
//! record folded in by [`GeoRecord::merge_from`]. The databases answer
//! independently — a miss in one never affects the others.

use anyhow::Result;
use maxminddb::{geoip2, Reader};
use std::net::IpAddr;
use std::path::PathBuf;

use super::loader::load_reader;
use super::types::GeoRecord;
use super::GeoLookup;

/// File paths for the geolocation databases, each optional.
#[derive(Debug, Clone, Default)]
pub struct GeoPaths {
    /// Country-level database (GeoLite2-Country).
    pub country: Option<PathBuf>,
    /// City-level database (GeoLite2-City).
    pub city: Option<PathBuf>,
    /// Network/ASN database (GeoLite2-ASN).
    pub asn: Option<PathBuf>,
}

/// The loaded geolocation databases.
///
/// Populated once at startup and shared read-only across request tasks; the
/// readers are never mutated after loading, so concurrent lookups need no
/// locking.
pub struct GeoDatabases {
    country: Option<Reader<Vec<u8>>>,
    city: Option<Reader<Vec<u8>>>,
    asn: Option<Reader<Vec<u8>>>,
}

impl GeoDatabases {
    /// Opens every configured database, failing fast on the first one that
    /// cannot be read or parsed.
    ///
    /// Unconfigured databases are simply absent; with no database configured
    /// at all, every lookup returns an empty record (and the server still
    /// starts, logging a warning).
    pub async fn open(paths: &GeoPaths) -> Result<Self> {
        let country = match &paths.country {
            Some(path) => Some(load_reader(path).await?),
            None => None,
        };
        let city = match &paths.city {
            Some(path) => Some(load_reader(path).await?),
            None => None,
        };
        let asn = match &paths.asn {
            Some(path) => Some(load_reader(path).await?),
            None => None,
        };

        if country.is_none() && city.is_none() && asn.is_none() {
            log::warn!(
                "No geolocation databases configured; all lookups will return empty records"
            );
        }

        Ok(Self { country, city, asn })
    }

    /// Builds an instance with no databases, for wiring tests.
    #[cfg(test)]
    pub(crate) fn empty() -> Self {
        Self {
            country: None,
            city: None,
            asn: None,
        }
    }

    /// Country-level answer: country codes, continent, proxy traits.
    fn lookup_country(&self, addr: IpAddr, ip: &str) -> Option<GeoRecord> {
        let reader = self.country.as_ref()?;

        let result = match reader.lookup(addr) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("Country lookup failed for {}: {}", ip, e);
                return None;
            }
        };
        if !result.has_data() {
            return None;
        }
        let rec: geoip2::Country = match result.decode() {
            Ok(Some(rec)) => rec,
            _ => return None,
        };

        let mut partial = GeoRecord::for_ip(ip);
        partial.country = rec.country.iso_code.map(|s| s.to_string());
        partial.registered_country = rec.registered_country.iso_code.map(|s| s.to_string());
        partial.represented_country = rec.represented_country.iso_code.map(|s| s.to_string());
        partial.continent = rec.continent.code.map(|s| s.to_string());
        partial.is_anonymous_proxy = rec.traits.is_anonymous_proxy;
        partial.is_satellite_provider = rec.traits.is_satellite_provider;
        Some(partial)
    }

    /// City-level answer: location, subdivision, postal, timezone; also
    /// carries country fields so a city-only deployment still resolves them.
    fn lookup_city(&self, addr: IpAddr, ip: &str) -> Option<GeoRecord> {
        let reader = self.city.as_ref()?;

        let result = match reader.lookup(addr) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("City lookup failed for {}: {}", ip, e);
                return None;
            }
        };
        if !result.has_data() {
            return None;
        }
        let rec: geoip2::City = match result.decode() {
            Ok(Some(rec)) => rec,
            _ => return None,
        };

        let mut partial = GeoRecord::for_ip(ip);
        partial.country = rec.country.iso_code.map(|s| s.to_string());
        partial.continent = rec.continent.code.map(|s| s.to_string());
        partial.city = rec.city.names.english.map(|s| s.to_string());
        if let Some(subdivision) = rec.subdivisions.first() {
            partial.region = subdivision.names.english.map(|s| s.to_string());
            partial.region_code = subdivision.iso_code.map(|s| s.to_string());
        }
        partial.postal_code = rec.postal.code.map(|s| s.to_string());
        partial.latitude = rec.location.latitude;
        partial.longitude = rec.location.longitude;
        partial.accuracy_radius = rec.location.accuracy_radius;
        partial.metro_code = rec.location.metro_code;
        partial.timezone = rec.location.time_zone.map(|s| s.to_string());
        partial.is_anonymous_proxy = rec.traits.is_anonymous_proxy;
        partial.is_satellite_provider = rec.traits.is_satellite_provider;
        Some(partial)
    }

    /// Network-level answer: ASN number and organization.
    fn lookup_asn(&self, addr: IpAddr, ip: &str) -> Option<GeoRecord> {
        let reader = self.asn.as_ref()?;

        let result = match reader.lookup(addr) {
            Ok(result) => result,
            Err(e) => {
                log::debug!("ASN lookup failed for {}: {}", ip, e);
                return None;
            }
        };
        if !result.has_data() {
            return None;
        }
        let rec: geoip2::Asn = match result.decode() {
            Ok(Some(rec)) => rec,
            _ => return None,
        };

        let mut partial = GeoRecord::for_ip(ip);
        partial.asn = rec.autonomous_system_number;
        partial.asn_org = rec.autonomous_system_organization.map(|s| s.to_string());
        Some(partial)
    }
}

impl GeoLookup for GeoDatabases {
    fn lookup(&self, ip: &str) -> GeoRecord {
        let mut record = GeoRecord::for_ip(ip);

        let addr: IpAddr = match ip.parse() {
            Ok(addr) => addr,
            Err(_) => return record,
        };

        // Country first, then the more specific sources; each later answer
        // overrides a field only when it actually carries a value.
        if let Some(partial) = self.lookup_country(addr, ip) {
            record.merge_from(partial);
        }
        if let Some(partial) = self.lookup_city(addr, ip) {
            record.merge_from(partial);
        }
        if let Some(partial) = self.lookup_asn(addr, ip) {
            record.merge_from(partial);
        }

        record
    }
}
