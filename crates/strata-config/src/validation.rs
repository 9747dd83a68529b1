//! Configuration validation module.
//!
//! Checks configuration values once at startup, failing fast on invalid
//! configuration rather than at the first request.

use crate::{AppConfig, CacheBackend};
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { name: String, value: u16 },
    /// Pool size configuration is invalid (min must be <= max).
    InvalidPoolSize { min: u32, max: u32 },
    /// Pool size exceeds maximum allowed.
    PoolSizeTooLarge { value: u64, maximum: u64 },
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// Timeout or TTL value must be positive.
    NonPositiveTimeout { name: String, value: u64 },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Metrics path must be absolute.
    InvalidMetricsPath { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { name, value } => {
                write!(f, "Invalid port for {name}: {value} (must be 1-65535)")
            }
            Self::InvalidPoolSize { min, max } => {
                write!(
                    f,
                    "Invalid pool size: min ({min}) cannot be greater than max ({max})"
                )
            }
            Self::PoolSizeTooLarge { value, maximum } => {
                write!(f, "Pool size {value} exceeds maximum allowed ({maximum})")
            }
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {url_type} URL: {message}")
            }
            Self::NonPositiveTimeout { name, value } => {
                write!(f, "'{name}' must be positive, got {value}")
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{value}' (valid: trace, debug, info, warn, error)"
                )
            }
            Self::InvalidMetricsPath { value } => {
                write!(f, "Metrics path must start with '/', got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Result of configuration validation containing all errors found.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<ConfigValidationError>,
}

impl ValidationResult {
    fn add_error(&mut self, error: ConfigValidationError) {
        self.errors.push(error);
    }

    fn into_result(self) -> Result<(), Vec<ConfigValidationError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Maximum connection pool size.
    const MAX_POOL_SIZE: u64 = 1000;
    /// Valid log levels.
    const VALID_LOG_LEVELS: &'static [&'static str] = &["trace", "debug", "info", "warn", "error"];
    /// Accepted database URL schemes.
    const DATABASE_SCHEMES: &'static [&'static str] = &["postgres", "postgresql"];
    /// Accepted Redis URL schemes.
    const REDIS_SCHEMES: &'static [&'static str] = &["redis", "rediss", "redis+unix", "unix"];

    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut result = ValidationResult::default();

        Self::validate_server(&config.server, &mut result);
        Self::validate_database(&config.database, &mut result);
        Self::validate_cache(config, &mut result);
        Self::validate_observability(&config.observability, &mut result);

        result.into_result()
    }

    fn validate_server(config: &crate::ServerConfig, result: &mut ValidationResult) {
        if config.port == 0 {
            result.add_error(ConfigValidationError::InvalidPort {
                name: "server.port".to_string(),
                value: config.port,
            });
        }

        if config.request_timeout_secs == 0 {
            result.add_error(ConfigValidationError::NonPositiveTimeout {
                name: "server.request_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_database(config: &crate::DatabaseConfig, result: &mut ValidationResult) {
        Self::validate_url("database", &config.url, Self::DATABASE_SCHEMES, result);

        if config.min_connections > config.max_connections {
            result.add_error(ConfigValidationError::InvalidPoolSize {
                min: config.min_connections,
                max: config.max_connections,
            });
        }
        if u64::from(config.max_connections) > Self::MAX_POOL_SIZE {
            result.add_error(ConfigValidationError::PoolSizeTooLarge {
                value: u64::from(config.max_connections),
                maximum: Self::MAX_POOL_SIZE,
            });
        }

        if config.connect_timeout_secs == 0 {
            result.add_error(ConfigValidationError::NonPositiveTimeout {
                name: "database.connect_timeout_secs".to_string(),
                value: 0,
            });
        }
        if config.idle_timeout_secs == 0 {
            result.add_error(ConfigValidationError::NonPositiveTimeout {
                name: "database.idle_timeout_secs".to_string(),
                value: 0,
            });
        }
    }

    fn validate_cache(config: &AppConfig, result: &mut ValidationResult) {
        // Redis rejects SETEX with a zero expiry.
        if config.cache.ttl_secs == 0 {
            result.add_error(ConfigValidationError::NonPositiveTimeout {
                name: "cache.ttl_secs".to_string(),
                value: 0,
            });
        }

        if config.cache.backend != CacheBackend::Redis {
            return;
        }

        Self::validate_url("redis", &config.redis.url, Self::REDIS_SCHEMES, result);

        let pool_size = config.redis.pool_size as u64;
        if pool_size == 0 {
            result.add_error(ConfigValidationError::InvalidPoolSize { min: 1, max: 0 });
        } else if pool_size > Self::MAX_POOL_SIZE {
            result.add_error(ConfigValidationError::PoolSizeTooLarge {
                value: pool_size,
                maximum: Self::MAX_POOL_SIZE,
            });
        }
    }

    fn validate_observability(config: &crate::ObservabilityConfig, result: &mut ValidationResult) {
        let level = config.log_level.to_lowercase();
        if !Self::VALID_LOG_LEVELS.contains(&level.as_str()) {
            result.add_error(ConfigValidationError::InvalidLogLevel {
                value: config.log_level.clone(),
            });
        }

        if config.metrics_enabled && !config.metrics_path.starts_with('/') {
            result.add_error(ConfigValidationError::InvalidMetricsPath {
                value: config.metrics_path.clone(),
            });
        }
    }

    fn validate_url(url_type: &str, raw: &str, schemes: &[&str], result: &mut ValidationResult) {
        if raw.is_empty() {
            result.add_error(ConfigValidationError::InvalidUrl {
                url_type: url_type.to_string(),
                message: "URL cannot be empty".to_string(),
            });
            return;
        }

        match Url::parse(raw) {
            Ok(url) if schemes.contains(&url.scheme()) => {}
            Ok(url) => result.add_error(ConfigValidationError::InvalidUrl {
                url_type: url_type.to_string(),
                message: format!(
                    "unsupported scheme '{}' (expected one of: {})",
                    url.scheme(),
                    schemes.join(", ")
                ),
            }),
            Err(e) => result.add_error(ConfigValidationError::InvalidUrl {
                url_type: url_type.to_string(),
                message: format!("Invalid URL format: {e}"),
            }),
        }
    }
}

/// Formats validation errors into a single message.
#[must_use]
pub fn format_validation_errors(errors: &[ConfigValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
