//! User service trait definition.

use async_trait::async_trait;
use strata_core::{StrataResult, User};

/// Read-only user lookups with cache administration.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Looks a user up by id, consulting the cache when `use_cache` is set.
    ///
    /// Returns `Ok(None)` when no such user exists.
    async fn lookup_by_id(&self, id: i64, use_cache: bool) -> StrataResult<Option<User>>;

    /// Looks a user up by email, consulting the cache when `use_cache` is set.
    async fn lookup_by_email(&self, email: &str, use_cache: bool) -> StrataResult<Option<User>>;

    /// Removes the id-keyed cache entry for `id`.
    ///
    /// Email-keyed entries for the same user are left to expire.
    async fn invalidate(&self, id: i64) -> StrataResult<()>;

    /// Drops every entry held by the cache backend.
    async fn clear_cache(&self) -> StrataResult<()>;
}
