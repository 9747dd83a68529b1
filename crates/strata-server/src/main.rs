//! # Strata Server
//!
//! Serves cache-aside user lookups over HTTP.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use strata_config::{AppConfig, ConfigLoader};
use strata_core::telemetry::{init_telemetry, TelemetryConfig};
use strata_core::{StrataError, StrataResult};
use strata_rest::{create_router, AppState};
use strata_server::di::AppContainer;
use strata_server::startup::{print_banner, print_startup_info};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let loader = match ConfigLoader::from_default_location() {
        Ok(loader) => loader,
        Err(e) => {
            let _ = init_telemetry(&TelemetryConfig::default());
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    let config = loader.get().await;

    if let Err(e) = init_telemetry(&config.observability.telemetry()) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    print_banner();
    info!("Starting Strata user cache...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    info!("Environment: {}", config.app.environment);

    if let Err(e) = run(config).await {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> StrataResult<()> {
    let container = AppContainer::build(&config).await?;

    let mut state = AppState::new(container.user_service());
    if config.observability.metrics_enabled {
        state = state.with_metrics(install_metrics()?, config.observability.metrics_path.clone());
    }

    let router = create_router(state, &config.server);

    let addr = config.server.addr();
    info!("Starting REST server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| StrataError::Internal(format!("Failed to bind {addr}: {e}")))?;

    print_startup_info(&config);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| StrataError::Internal(format!("REST server error: {e}")))?;

    container.shutdown().await;
    info!("Server shutdown complete");
    Ok(())
}

fn install_metrics() -> StrataResult<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| StrataError::Internal(format!("Failed to install metrics recorder: {e}")))?;
    strata_service::metrics::register_metrics();
    Ok(handle)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            info!("Received terminate signal, initiating graceful shutdown...");
        }
    }
}
