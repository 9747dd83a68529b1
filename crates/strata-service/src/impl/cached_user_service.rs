//! Cache-aside user service.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::metrics::{CacheMetrics, LookupKind, LookupOutcome};
use crate::user_service::UserService;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use strata_config::{CacheConfig, CacheFailurePolicy};
use strata_core::{StrataResult, User};
use strata_store::UserStore;
use tracing::{debug, info, warn};

/// Read-through user lookups over a store and a cache.
///
/// The cache is populated only by a store read that consulted the cache and
/// found a row. Absence is never cached, and bypassed reads leave the cache
/// untouched. Concurrent misses may both populate; the last write wins.
pub struct CachedUserService {
    store: Arc<dyn UserStore>,
    cache: Arc<dyn CacheInterface>,
    ttl: Duration,
    failure_policy: CacheFailurePolicy,
}

impl CachedUserService {
    /// Creates a service that propagates cache failures.
    pub fn new(store: Arc<dyn UserStore>, cache: Arc<dyn CacheInterface>, ttl: Duration) -> Self {
        Self {
            store,
            cache,
            ttl,
            failure_policy: CacheFailurePolicy::default(),
        }
    }

    /// Creates a service from the `[cache]` configuration section.
    pub fn from_config(
        store: Arc<dyn UserStore>,
        cache: Arc<dyn CacheInterface>,
        config: &CacheConfig,
    ) -> Self {
        Self::new(store, cache, config.ttl()).with_failure_policy(config.failure_policy)
    }

    /// Sets how cache failures are handled during lookups.
    #[must_use]
    pub fn with_failure_policy(mut self, failure_policy: CacheFailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// TTL applied to every populated entry.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    async fn read_through<F, Fut>(
        &self,
        kind: LookupKind,
        key: String,
        use_cache: bool,
        fetch: F,
    ) -> StrataResult<Option<User>>
    where
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = StrataResult<Option<User>>> + Send,
    {
        if !use_cache {
            debug!("Cache bypassed for '{}'", key);
            CacheMetrics::lookup(kind, LookupOutcome::Bypass);
            return fetch().await;
        }

        if let Some(user) = self.cached(&key).await? {
            debug!("Serving '{}' from cache", key);
            CacheMetrics::lookup(kind, LookupOutcome::Hit);
            return Ok(Some(user));
        }

        CacheMetrics::lookup(kind, LookupOutcome::Miss);
        let Some(user) = fetch().await? else {
            debug!("No user for '{}'; nothing cached", key);
            return Ok(None);
        };

        self.populate(&key, &user).await?;
        Ok(Some(user))
    }

    async fn cached(&self, key: &str) -> StrataResult<Option<User>> {
        match self.cache.get::<User>(key).await {
            Ok(user) => Ok(user),
            Err(e) if self.failure_policy == CacheFailurePolicy::Degrade => {
                warn!("Cache read for '{}' failed, falling back to store: {}", key, e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn populate(&self, key: &str, user: &User) -> StrataResult<()> {
        match self.cache.set(key, user, self.ttl).await {
            Ok(()) => {
                debug!("Populated '{}' for {}s", key, self.ttl.as_secs());
                Ok(())
            }
            Err(e) if self.failure_policy == CacheFailurePolicy::Degrade => {
                warn!("Cache write for '{}' failed: {}", key, e);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

#[async_trait]
impl UserService for CachedUserService {
    async fn lookup_by_id(&self, id: i64, use_cache: bool) -> StrataResult<Option<User>> {
        let store = Arc::clone(&self.store);
        self.read_through(LookupKind::Id, cache_keys::user_by_id(id), use_cache, || async move {
            store.fetch_by_id(id).await
        })
        .await
    }

    async fn lookup_by_email(&self, email: &str, use_cache: bool) -> StrataResult<Option<User>> {
        let store = Arc::clone(&self.store);
        let owned = email.to_string();
        self.read_through(
            LookupKind::Email,
            cache_keys::user_by_email(email),
            use_cache,
            || async move { store.fetch_by_email(&owned).await },
        )
        .await
    }

    async fn invalidate(&self, id: i64) -> StrataResult<()> {
        let key = cache_keys::user_by_id(id);
        let existed = self.cache.delete(&key).await?;
        CacheMetrics::invalidation();
        info!("Invalidated '{}' (present: {})", key, existed);
        Ok(())
    }

    async fn clear_cache(&self) -> StrataResult<()> {
        self.cache.clear().await?;
        info!("User cache cleared");
        Ok(())
    }
}

impl std::fmt::Debug for CachedUserService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedUserService")
            .field("ttl", &self.ttl)
            .field("failure_policy", &self.failure_policy)
            .finish_non_exhaustive()
    }
}
