//! Configuration loader with layered sources.

use crate::validation::{format_validation_errors, ConfigValidator};
use crate::AppConfig;
use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;
use std::sync::Arc;
use strata_core::StrataError;
use tokio::sync::RwLock;
use tracing::{debug, info};
use url::Url;

/// Configuration loader with runtime refresh support.
#[derive(Clone)]
pub struct ConfigLoader {
    config: Arc<RwLock<AppConfig>>,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `STRATA_` prefix
    /// 5. The plain `REDIS_*` / `POSTGRES_*` variables of the legacy
    ///    deployment, when set
    pub fn new(config_dir: impl Into<String>) -> Result<Self, StrataError> {
        let config_dir = config_dir.into();
        let config = Self::load_config(&config_dir)?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_dir,
        })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> Result<Self, StrataError> {
        Self::new("./config")
    }

    /// Returns the current configuration.
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Reloads the configuration from disk.
    pub async fn reload(&self) -> Result<(), StrataError> {
        let new_config = Self::load_config(&self.config_dir)?;
        let mut config = self.config.write().await;
        *config = new_config;
        info!("Configuration reloaded successfully");
        Ok(())
    }

    /// Loads configuration from the specified directory.
    fn load_config(config_dir: &str) -> Result<AppConfig, StrataError> {
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("STRATA_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder();

        for name in ["default", environment.as_str(), "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("STRATA")
                .separator("__")
                .try_parsing(true),
        );

        let legacy = LegacyOverrides::from_lookup(|key| std::env::var(key).ok())?;
        builder = legacy.apply(builder).map_err(config_error_to_strata_error)?;

        let app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_strata_error)?;

        ConfigValidator::validate(&app_config)
            .map_err(|errors| StrataError::Configuration(format_validation_errors(&errors)))?;

        Ok(app_config)
    }
}

/// Settings taken from the variables used by the legacy deployment:
/// `REDIS_SOCKET_PATH`, `REDIS_CACHE_TTL` and `POSTGRES_{HOST,PORT,DB,USER,PASSWORD}`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LegacyOverrides {
    /// Redis URL derived from the socket path.
    pub redis_url: Option<String>,
    /// Cache TTL in seconds.
    pub cache_ttl_secs: Option<i64>,
    /// Database URL assembled from the `POSTGRES_*` parts.
    pub database_url: Option<String>,
}

impl LegacyOverrides {
    /// Reads the legacy variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StrataError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let redis_url = lookup("REDIS_SOCKET_PATH")
            .filter(|path| !path.is_empty())
            .map(|path| format!("redis+unix://{path}"));

        let cache_ttl_secs = lookup("REDIS_CACHE_TTL")
            .map(|raw| {
                raw.trim().parse::<i64>().map_err(|e| {
                    StrataError::Configuration(format!("REDIS_CACHE_TTL must be an integer: {e}"))
                })
            })
            .transpose()?;

        let database_url = match lookup("POSTGRES_HOST").filter(|host| !host.is_empty()) {
            Some(host) => Some(Self::postgres_url(&host, &lookup)?),
            None => None,
        };

        Ok(Self {
            redis_url,
            cache_ttl_secs,
            database_url,
        })
    }

    fn postgres_url<F>(host: &str, lookup: &F) -> Result<String, StrataError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let invalid = |what: &str| StrataError::Configuration(format!("Invalid POSTGRES_{what}"));

        let mut url = Url::parse(&format!("postgres://{host}")).map_err(|_| invalid("HOST"))?;

        if let Some(port) = lookup("POSTGRES_PORT") {
            let port = port.trim().parse::<u16>().map_err(|_| invalid("PORT"))?;
            url.set_port(Some(port)).map_err(|()| invalid("PORT"))?;
        }
        if let Some(user) = lookup("POSTGRES_USER") {
            url.set_username(&user).map_err(|()| invalid("USER"))?;
        }
        if let Some(password) = lookup("POSTGRES_PASSWORD") {
            url.set_password(Some(&password)).map_err(|()| invalid("PASSWORD"))?;
        }
        if let Some(db) = lookup("POSTGRES_DB") {
            url.set_path(&format!("/{}", db.trim_start_matches('/')));
        }

        Ok(url.to_string())
    }

    /// Applies the overrides on top of every other source.
    pub fn apply(
        &self,
        mut builder: ConfigBuilder<DefaultState>,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        if let Some(url) = &self.redis_url {
            builder = builder.set_override("redis.url", url.as_str())?;
        }
        if let Some(ttl) = self.cache_ttl_secs {
            builder = builder.set_override("cache.ttl_secs", ttl)?;
        }
        if let Some(url) = &self.database_url {
            builder = builder.set_override("database.url", url.as_str())?;
        }
        Ok(builder)
    }
}

fn config_error_to_strata_error(err: ConfigError) -> StrataError {
    StrataError::Configuration(err.to_string())
}
