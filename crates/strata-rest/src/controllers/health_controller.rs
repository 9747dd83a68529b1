//! Health check controller.

use axum::{response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status.
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Service banner returned at `/`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub docs: &'static str,
    pub status: &'static str,
}

/// Creates the health router.
pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

/// Root endpoint.
pub async fn root() -> impl IntoResponse {
    Json(RootResponse {
        message: "Strata user cache API",
        docs: "/api/v1",
        status: "ok",
    })
}

/// Health check endpoint.
///
/// Reports liveness only; the store and cache are not probed.
pub async fn health_check() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
