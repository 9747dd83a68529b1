//! Prometheus scrape endpoint.

use crate::state::MetricsEndpoint;
use axum::{routing::get, Router};

/// Creates a router serving the recorder's text exposition at the configured path.
pub fn router(endpoint: MetricsEndpoint) -> Router {
    let MetricsEndpoint { handle, path } = endpoint;
    Router::new().route(
        &path,
        get(move || {
            let handle = handle.clone();
            async move { handle.render() }
        }),
    )
}
