//! Cache interface trait for abstracted caching operations.

use async_trait::async_trait;
use std::time::Duration;
use strata_core::StrataResult;

/// Cache interface for storing and retrieving cached data.
///
/// Values are UTF-8 JSON text so the trait stays dyn-compatible.
#[async_trait]
pub trait CacheInterface: Send + Sync {
    /// Get a raw value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> StrataResult<Option<String>>;

    /// Set a raw value in the cache with a TTL.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> StrataResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> StrataResult<bool>;

    /// Remove every entry.
    async fn clear(&self) -> StrataResult<()>;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    ///
    /// A payload that does not decode is a `Serialization` error.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> StrataResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> StrataResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}
