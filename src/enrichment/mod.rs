//! Per-request enrichment orchestration.
//!
//! The pipeline resolves the client IP, runs the leaf extractors, feeds their
//! outputs through the datacenter classifier and VPN heuristic, and reduces
//! everything to one immutable [`EnrichmentResult`]. Every step is
//! synchronous, non-blocking and total — a request that cannot be resolved at
//! all still completes with `trustLevel = "unknown"`.

pub mod middleware;

use axum::http::HeaderMap;
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::analysis::{score, TrustLevel, VpnHeuristic};
use crate::config::HEADER_X_FORWARDED_FOR;
use crate::datacenter::DatacenterBlocklist;
use crate::geoip::{GeoLookup, GeoRecord};
use crate::signals::{parse_client_signature, ClientSignature, HeaderExtractor, HeaderSignals};

/// The immutable identity/risk profile attached to each request.
///
/// Created once by the pipeline at the start of request handling, shared
/// read-only through the request extensions, and dropped when the request
/// completes. `trust_level` is a pure function of the other fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentResult {
    /// The resolved client IP address.
    pub ip: String,
    /// Geolocation data for the resolved IP.
    pub geo: GeoRecord,
    /// Raw and derived header signals.
    pub headers: HeaderSignals,
    /// Parsed client signature.
    pub client: ClientSignature,
    /// Whether the IP falls inside a known datacenter block.
    pub is_datacenter_ip: bool,
    /// Whether the VPN/proxy heuristic fired.
    pub is_vpn_suspect: bool,
    /// The fused trust classification.
    pub trust_level: TrustLevel,
}

/// The per-request enrichment driver.
///
/// Holds the shared, read-mostly resources — the geo lookup source, the
/// datacenter blocklist, the header extractor with its timezone table, and
/// the VPN heuristic with its keyword table — all populated at startup and
/// never mutated afterwards, so concurrent request tasks share one instance
/// without locking.
pub struct EnrichmentPipeline {
    geo: Arc<dyn GeoLookup>,
    datacenter: DatacenterBlocklist,
    extractor: HeaderExtractor,
    vpn: VpnHeuristic,
}

impl EnrichmentPipeline {
    /// Wires a pipeline from its injected components.
    pub fn new(
        geo: Arc<dyn GeoLookup>,
        datacenter: DatacenterBlocklist,
        extractor: HeaderExtractor,
        vpn: VpnHeuristic,
    ) -> Self {
        Self {
            geo,
            datacenter,
            extractor,
            vpn,
        }
    }

    /// Produces the enrichment result for one request.
    pub fn enrich(&self, peer: Option<SocketAddr>, headers: &HeaderMap) -> EnrichmentResult {
        let ip = resolve_client_ip(headers, peer);

        let geo = self.geo.lookup(&ip);
        let header_signals = self.extractor.extract(headers);
        let client = parse_client_signature(&header_signals.user_agent, &header_signals.sec_ch_ua);

        let is_datacenter_ip = self.datacenter.is_datacenter(&ip);
        let is_vpn_suspect = self.vpn.is_suspect(&geo, &header_signals);

        let trust_level = score(
            geo.country_code(),
            &header_signals.tz_country,
            &header_signals.lang_country,
            is_datacenter_ip,
            is_vpn_suspect,
        );

        EnrichmentResult {
            ip,
            geo,
            headers: header_signals,
            client,
            is_datacenter_ip,
            is_vpn_suspect,
            trust_level,
        }
    }
}

/// Resolves the client IP for one request.
///
/// Prefers the first entry of the forwarded-for list, trimmed, when present
/// and non-empty; otherwise the transport peer address with the port
/// stripped; otherwise `""`.
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(forwarded) = headers
        .get(HEADER_X_FORWARDED_FOR)
        .and_then(|value| value.to_str().ok())
    {
        let first = forwarded.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return first.to_string();
        }
    }
    peer.map(|addr| addr.ip().to_string()).unwrap_or_default()
}
