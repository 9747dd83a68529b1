//! Store port definition.

use async_trait::async_trait;
use strata_core::{StrataResult, User};

/// Read interface over the durable user store.
///
/// A missing row is `Ok(None)`, never an error. Pooling, transactions and
/// isolation are the implementation's business.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetches a user by id.
    async fn fetch_by_id(&self, id: i64) -> StrataResult<Option<User>>;

    /// Fetches a user by email address.
    async fn fetch_by_email(&self, email: &str) -> StrataResult<Option<User>>;
}
