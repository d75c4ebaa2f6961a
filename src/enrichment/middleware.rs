//! Request-enrichment middleware.
//!
//! Runs the pipeline for every inbound request and publishes the result into
//! the request extensions, where downstream handlers read it via
//! `Extension<Arc<EnrichmentResult>>`. Absence of the extension (middleware
//! not installed) is observable and distinct from a populated-but-empty
//! result.

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::sync::Arc;

use super::EnrichmentPipeline;

/// Attaches an [`super::EnrichmentResult`] to each request.
///
/// The peer address comes from axum's connect-info when the server is run
/// with it; tests may instead insert a `ConnectInfo` extension on the request
/// or rely on the forwarded-for header alone.
pub async fn enrich_request(
    State(pipeline): State<Arc<EnrichmentPipeline>>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    mut request: Request,
    next: Next,
) -> Response {
    let peer = connect_info.map(|ConnectInfo(addr)| addr);
    let result = pipeline.enrich(peer, request.headers());

    log::debug!(
        "Enriched request from {:?}: country={:?} datacenter={} vpn={} trust={}",
        result.ip,
        result.geo.country,
        result.is_datacenter_ip,
        result.is_vpn_suspect,
        result.trust_level
    );

    request.extensions_mut().insert(Arc::new(result));
    next.run(request).await
}
