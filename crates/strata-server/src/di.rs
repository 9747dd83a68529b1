//! Application wiring.
//!
//! Everything is constructed once at startup and shared as `Arc` handles:
//!
//! ```text
//! AppConfig
//!   ├─ [database] → DatabasePool → PostgresUserStore ─┐
//!   ├─ [redis]/[cache].backend → RedisCache | MemoryCache ─┤
//!   └─ [cache] ttl, failure_policy ──────────→ CachedUserService
//! ```

use std::sync::Arc;
use strata_config::{AppConfig, CacheBackend, CacheConfig, RedisConfig};
use strata_core::StrataResult;
use strata_service::{
    create_redis_pool, CacheInterface, CachedUserService, MemoryCache, RedisCache, UserService,
};
use strata_store::{create_pool, DatabasePool, PostgresUserStore, UserStore};
use tracing::info;

/// Shared handles for the running application.
#[derive(Clone)]
pub struct AppContainer {
    store: Arc<dyn UserStore>,
    cache: Arc<dyn CacheInterface>,
    user_service: Arc<dyn UserService>,
    database: Option<Arc<DatabasePool>>,
}

impl AppContainer {
    /// Connects to PostgreSQL, selects the cache backend and builds the
    /// lookup service.
    pub async fn build(config: &AppConfig) -> StrataResult<Self> {
        let database = create_pool(&config.database).await?;
        if config.database.run_migrations {
            database.run_migrations().await?;
        }

        let store: Arc<dyn UserStore> = Arc::new(PostgresUserStore::new(Arc::clone(&database)));
        let cache = build_cache(config.cache.backend, &config.redis)?;

        let mut container = Self::from_parts(store, cache, &config.cache);
        container.database = Some(database);
        Ok(container)
    }

    /// Builds the container around existing adapters.
    pub fn from_parts(
        store: Arc<dyn UserStore>,
        cache: Arc<dyn CacheInterface>,
        cache_config: &CacheConfig,
    ) -> Self {
        let user_service: Arc<dyn UserService> = Arc::new(CachedUserService::from_config(
            Arc::clone(&store),
            Arc::clone(&cache),
            cache_config,
        ));

        Self {
            store,
            cache,
            user_service,
            database: None,
        }
    }

    /// The cache-aside lookup service.
    pub fn user_service(&self) -> Arc<dyn UserService> {
        Arc::clone(&self.user_service)
    }

    /// The durable store.
    pub fn store(&self) -> Arc<dyn UserStore> {
        Arc::clone(&self.store)
    }

    /// The cache backend.
    pub fn cache(&self) -> Arc<dyn CacheInterface> {
        Arc::clone(&self.cache)
    }

    /// Closes the database pool, if one was opened.
    pub async fn shutdown(&self) {
        if let Some(database) = &self.database {
            database.close().await;
        }
    }
}

/// Creates the configured cache backend.
pub fn build_cache(
    backend: CacheBackend,
    redis: &RedisConfig,
) -> StrataResult<Arc<dyn CacheInterface>> {
    match backend {
        CacheBackend::Redis => {
            info!("Using Redis cache at {}", redis.url);
            Ok(Arc::new(RedisCache::new(create_redis_pool(redis)?)))
        }
        CacheBackend::Memory => {
            info!("Using in-process memory cache");
            Ok(Arc::new(MemoryCache::new()))
        }
    }
}
