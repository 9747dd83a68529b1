//! Main application router.

use crate::{
    controllers::{cache_controller, health_controller, metrics_controller, user_controller},
    middleware::logging_middleware,
    state::AppState,
};
use axum::{middleware, Router};
use strata_config::ServerConfig;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use tracing::info;

/// Creates the main application router.
pub fn create_router(state: AppState, server_config: &ServerConfig) -> Router {
    let cors = create_cors_layer(server_config);

    let api_router = Router::new()
        .merge(user_controller::router())
        .merge(cache_controller::router())
        .with_state(state.clone());

    let mut router = Router::new()
        .merge(health_controller::router())
        .nest("/api/v1", api_router);

    if let Some(endpoint) = state.metrics {
        info!("Prometheus metrics exposed at {}", endpoint.path);
        router = router.merge(metrics_controller::router(endpoint));
    }

    let router = router
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(server_config.request_timeout()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with REST endpoints under /api/v1");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if server_config.cors_enabled {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    }
}
