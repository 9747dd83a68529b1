//! PostgreSQL user store implementation.

use crate::{traits::UserStore, DatabasePool};
use async_trait::async_trait;
use std::sync::Arc;
use strata_core::{StrataResult, User, UserRecord};
use tracing::debug;

const SELECT_BY_ID: &str = "SELECT id, name, email, created_at FROM users WHERE id = $1";
const SELECT_BY_EMAIL: &str = "SELECT id, name, email, created_at FROM users WHERE email = $1";

/// PostgreSQL user store.
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: Arc<DatabasePool>,
}

impl PostgresUserStore {
    /// Creates a new PostgreSQL user store.
    #[must_use]
    pub fn new(pool: Arc<DatabasePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn fetch_by_id(&self, id: i64) -> StrataResult<Option<User>> {
        debug!("Fetching user by id: {}", id);

        let row = sqlx::query_as::<_, UserRecord>(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(User::try_from).transpose()
    }

    async fn fetch_by_email(&self, email: &str) -> StrataResult<Option<User>> {
        debug!("Fetching user by email: {}", email);

        let row = sqlx::query_as::<_, UserRecord>(SELECT_BY_EMAIL)
            .bind(email)
            .fetch_optional(self.pool.inner())
            .await?;

        row.map(User::try_from).transpose()
    }
}

impl std::fmt::Debug for PostgresUserStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostgresUserStore")
            .field("pool", &self.pool)
            .finish()
    }
}
