//! Server startup utilities.

use strata_config::AppConfig;
use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(r#"
     _             _
 ___| |_ _ __ __ _| |_ __ _
/ __| __| '__/ _` | __/ _` |
\__ \ |_| | | (_| | || (_| |
|___/\__|_|  \__,_|\__\__,_|

        user cache
    "#);
}

/// Prints server startup information.
pub fn print_startup_info(config: &AppConfig) {
    let separator = "=".repeat(60);
    let addr = config.server.addr();
    info!("{}", separator);
    info!("REST API:  http://{}/api/v1", addr);
    info!("Health:    http://{}/health", addr);
    if config.observability.metrics_enabled {
        info!("Metrics:   http://{}{}", addr, config.observability.metrics_path);
    }
    info!("Cache:     {:?}, TTL {}s, on failure {:?}",
        config.cache.backend, config.cache.ttl_secs, config.cache.failure_policy);
    info!("{}", separator);
}
