//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Config, Pool, Runtime};
use std::sync::Arc;
use std::time::Duration;
use strata_config::RedisConfig;
use strata_core::{StrataError, StrataResult};
use tracing::{debug, info};

/// Redis-based cache.
#[derive(Clone)]
pub struct RedisCache {
    pool: Arc<Pool>,
}

impl RedisCache {
    /// Create a new Redis cache over a connection pool.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    async fn get_conn(&self) -> StrataResult<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| StrataError::Cache(format!("Failed to get Redis connection: {e}")))
    }
}

#[async_trait]
impl CacheInterface for RedisCache {
    async fn get_raw(&self, key: &str) -> StrataResult<Option<String>> {
        let mut conn = self.get_conn().await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| StrataError::Cache(format!("Failed to get key '{key}': {e}")))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> StrataResult<()> {
        let mut conn = self.get_conn().await?;
        // SETEX rejects a zero expiry.
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| StrataError::Cache(format!("Failed to set key '{key}': {e}")))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StrataResult<bool> {
        let mut conn = self.get_conn().await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| StrataError::Cache(format!("Failed to delete key '{key}': {e}")))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(deleted > 0)
    }

    async fn clear(&self) -> StrataResult<()> {
        let mut conn = self.get_conn().await?;

        let _: () = deadpool_redis::redis::cmd("FLUSHDB")
            .query_async(&mut conn)
            .await
            .map_err(|e| StrataError::Cache(format!("Failed to flush cache: {e}")))?;

        info!("Redis cache flushed");
        Ok(())
    }
}

impl std::fmt::Debug for RedisCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = self.pool.status();
        f.debug_struct("RedisCache")
            .field("size", &status.size)
            .field("available", &status.available)
            .finish()
    }
}

/// Creates a Redis connection pool from configuration.
///
/// Accepts TCP (`redis://`) and unix socket (`redis+unix://`) URLs. No
/// connection is opened until the first command.
pub fn create_redis_pool(config: &RedisConfig) -> StrataResult<Arc<Pool>> {
    let pool = Config::from_url(config.url.as_str())
        .builder()
        .map_err(|e| StrataError::Configuration(format!("Invalid Redis configuration: {e}")))?
        .max_size(config.pool_size)
        .runtime(Runtime::Tokio1)
        .build()
        .map_err(|e| StrataError::Configuration(format!("Failed to create Redis pool: {e}")))?;

    info!("Redis pool created (max size {})", config.pool_size);
    Ok(Arc::new(pool))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_pool_from_tcp_url() {
        let config = RedisConfig {
            url: "redis://localhost:6379".to_string(),
            pool_size: 4,
        };
        let pool = create_redis_pool(&config).unwrap();
        assert_eq!(pool.status().max_size, 4);
    }

    #[test]
    fn test_create_pool_from_socket_url() {
        let config = RedisConfig {
            url: "redis+unix:///var/run/redis/redis.sock".to_string(),
            pool_size: 2,
        };
        assert!(create_redis_pool(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_redis_is_cache_error() {
        let config = RedisConfig {
            url: "redis+unix:///nonexistent/strata-test.sock".to_string(),
            pool_size: 1,
        };
        let cache = RedisCache::new(create_redis_pool(&config).unwrap());

        let result = cache.get_raw("user:1").await;
        assert!(matches!(result, Err(StrataError::Cache(_))));
    }
}
