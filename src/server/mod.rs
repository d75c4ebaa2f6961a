//! HTTP server wiring.
//!
//! Provides two endpoints:
//! - `/info` - the request's own enrichment result as JSON (debug surface)
//! - `/health` - service liveness
//!
//! The enrichment middleware runs in front of every route, so each request
//! carries its result before any handler executes.

pub mod handlers;

use axum::routing::get;
use axum::{middleware, Router};
use std::net::SocketAddr;
use std::sync::Arc;

use crate::enrichment::middleware::enrich_request;
use crate::enrichment::EnrichmentPipeline;
use handlers::{health_handler, info_handler};

/// Builds the router with the enrichment middleware installed.
pub fn build_router(pipeline: Arc<EnrichmentPipeline>) -> Router {
    Router::new()
        .route("/info", get(info_handler))
        .route("/health", get(health_handler))
        .layer(middleware::from_fn_with_state(pipeline, enrich_request))
}

/// Binds the listener and serves requests until shutdown.
///
/// Served with connect-info so the middleware can see the transport peer
/// address when no forwarded-for header is present.
pub async fn start_server(
    port: u16,
    pipeline: Arc<EnrichmentPipeline>,
) -> Result<(), anyhow::Error> {
    let app = build_router(pipeline);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to port {}: {}", port, e))?;

    log::info!("Server listening on http://0.0.0.0:{}/", port);
    log::info!("  - Enrichment debug: http://0.0.0.0:{}/info", port);
    log::info!("  - Health: http://0.0.0.0:{}/health", port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
