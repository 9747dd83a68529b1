//! Logging initialization.
//!
//! Sets up a `tracing` subscriber with an `EnvFilter`. `RUST_LOG` wins over
//! the configured level when present.

#[cfg(feature = "telemetry")]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::StrataResult;
use serde::{Deserialize, Serialize};

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Telemetry configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format.
    #[serde(default)]
    pub log_format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
        }
    }
}

impl TelemetryConfig {
    /// Builds the default filter directive.
    ///
    /// The configured level applies to every target, including the
    /// `strata_*` crates and the HTTP trace layer.
    #[must_use]
    pub fn filter_directive(&self) -> String {
        self.log_level.trim().to_string()
    }
}

/// Initialize the global tracing subscriber.
#[cfg(feature = "telemetry")]
pub fn init_telemetry(config: &TelemetryConfig) -> StrataResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter_directive()));

    let result = match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    result.map_err(|e| crate::StrataError::Internal(format!("Failed to init logging: {e}")))?;

    tracing::info!(
        log_level = %config.log_level,
        log_format = ?config.log_format,
        "Logging initialized"
    );
    Ok(())
}

/// Placeholder for when telemetry feature is disabled.
#[cfg(not(feature = "telemetry"))]
pub fn init_telemetry(_config: &TelemetryConfig) -> StrataResult<()> {
    Ok(())
}
