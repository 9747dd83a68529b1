//! Application state for Axum handlers.

use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use strata_service::UserService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
    pub metrics: Option<MetricsEndpoint>,
}

impl AppState {
    /// Creates a new application state without a metrics endpoint.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self {
            user_service,
            metrics: None,
        }
    }

    /// Exposes the Prometheus recorder at `path`.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle, path: impl Into<String>) -> Self {
        self.metrics = Some(MetricsEndpoint {
            handle,
            path: path.into(),
        });
        self
    }
}

/// Where and what to render for Prometheus scrapes.
#[derive(Clone)]
pub struct MetricsEndpoint {
    pub handle: PrometheusHandle,
    pub path: String,
}
