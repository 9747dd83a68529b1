//! In-process cache with per-entry expiry.

use super::CacheInterface;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use strata_core::StrataResult;
use tracing::debug;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Map-backed cache for single-process deployments and tests.
///
/// Expired entries read as absent. They are purged when touched, and every
/// write sweeps out whatever else has expired.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl MemoryCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .values()
            .filter(|entry| !entry.is_expired(now))
            .count()
    }

    /// Whether no live entries remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CacheInterface for MemoryCache {
    async fn get_raw(&self, key: &str) -> StrataResult<Option<String>> {
        let now = Instant::now();
        {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if !entry.is_expired(now) => return Ok(Some(entry.value.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }

        let mut entries = self.entries.write();
        if entries.get(key).is_some_and(|entry| entry.is_expired(now)) {
            entries.remove(key);
            debug!("Expired key '{}' purged", key);
        }
        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> StrataResult<()> {
        let now = Instant::now();
        let entry = Entry {
            value: value.to_string(),
            expires_at: now + ttl,
        };

        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let purged = before - entries.len();
        if purged > 0 {
            debug!("Purged {} expired entries", purged);
        }
        entries.insert(key.to_string(), entry);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StrataResult<bool> {
        let now = Instant::now();
        Ok(self
            .entries
            .write()
            .remove(key)
            .is_some_and(|entry| !entry.is_expired(now)))
    }

    async fn clear(&self) -> StrataResult<()> {
        self.entries.write().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn test_set_then_get() {
        let cache = MemoryCache::new();
        cache.set_raw("user:1", "{}", TTL).await.unwrap();

        assert_eq!(cache.get_raw("user:1").await.unwrap().as_deref(), Some("{}"));
        assert!(cache.get_raw("user:2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_absent() {
        let cache = MemoryCache::new();
        cache
            .set_raw("user:1", "{}", Duration::from_millis(20))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(40)).await;

        assert!(cache.get_raw("user:1").await.unwrap().is_none());
        assert!(cache.is_empty());
        assert!(!cache.delete("user:1").await.unwrap());
    }

    #[tokio::test]
    async fn test_write_sweeps_expired_entries() {
        let cache = MemoryCache::new();
        cache
            .set_raw("user:1", "{}", Duration::from_millis(20))
            .await
            .unwrap();
        cache
            .set_raw("user:email:a@example.com", "{}", Duration::from_millis(20))
            .await
            .unwrap();
        cache.set_raw("user:3", "{}", TTL).await.unwrap();

        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(cache.entries.read().len(), 3);

        cache.set_raw("user:4", "{}", TTL).await.unwrap();

        let entries = cache.entries.read();
        assert_eq!(entries.len(), 2);
        assert!(entries.contains_key("user:3"));
        assert!(entries.contains_key("user:4"));
    }

    #[tokio::test]
    async fn test_overwrite_refreshes_value() {
        let cache = MemoryCache::new();
        cache.set_raw("k", "a", TTL).await.unwrap();
        cache.set_raw("k", "b", TTL).await.unwrap();

        assert_eq!(cache.get_raw("k").await.unwrap().as_deref(), Some("b"));
        assert_eq!(cache.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let cache = MemoryCache::new();
        cache.set_raw("a", "1", TTL).await.unwrap();
        cache.set_raw("b", "2", TTL).await.unwrap();

        assert!(cache.delete("a").await.unwrap());
        assert!(!cache.delete("a").await.unwrap());
        assert_eq!(cache.len(), 1);

        cache.clear().await.unwrap();
        assert!(cache.is_empty());
    }
}
