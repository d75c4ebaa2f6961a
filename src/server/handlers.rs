//! HTTP handlers.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::json;
use std::sync::Arc;

use crate::enrichment::EnrichmentResult;

/// Debug endpoint returning the request's own enrichment result as JSON.
///
/// A missing extension means the enrichment middleware was not invoked for
/// this request — reported as a distinguishable 404, never conflated with a
/// populated-but-empty result.
pub async fn info_handler(result: Option<Extension<Arc<EnrichmentResult>>>) -> Response {
    let Some(Extension(result)) = result else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "no enrichment result attached to this request"})),
        )
            .into_response();
    };

    let body = match serde_json::to_string_pretty(&*result) {
        Ok(body) => body,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to serialize enrichment result: {}", e),
            )
                .into_response();
        }
    };

    (StatusCode::OK, [("content-type", "application/json")], body).into_response()
}

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "service": "request_trust",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
