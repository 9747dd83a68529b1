//! In-memory user store.

use crate::traits::UserStore;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strata_core::{StrataResult, User};

/// Map-backed store, seeded explicitly.
///
/// Counts every fetch so callers can observe how often the store was hit.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<i64, User>>,
    fetches: AtomicUsize,
}

impl InMemoryUserStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `users`.
    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        let store = Self::new();
        for user in users {
            store.insert(user);
        }
        store
    }

    /// Inserts or replaces a user, keyed by id.
    pub fn insert(&self, user: User) {
        self.users.write().insert(user.id(), user);
    }

    /// Removes a user by id, returning it if present.
    pub fn remove(&self, id: i64) -> Option<User> {
        self.users.write().remove(&id)
    }

    /// Number of fetches served so far, found or not.
    #[must_use]
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn fetch_by_id(&self, id: i64) -> StrataResult<Option<User>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.read().get(&id).cloned())
    }

    async fn fetch_by_email(&self, email: &str) -> StrataResult<Option<User>> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .users
            .read()
            .values()
            .find(|user| user.email().as_str() == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, name: &str, email: &str) -> User {
        User::new(id, name, email, None).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_by_id() {
        let store = InMemoryUserStore::with_users([user(1, "Alice", "alice@example.com")]);

        let found = store.fetch_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.name(), "Alice");
        assert!(store.fetch_by_id(2).await.unwrap().is_none());
        assert_eq!(store.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_fetch_by_email_is_exact() {
        let store = InMemoryUserStore::with_users([
            user(1, "Alice", "alice@example.com"),
            user(2, "Bob", "bob@example.com"),
        ]);

        let found = store.fetch_by_email("bob@example.com").await.unwrap().unwrap();
        assert_eq!(found.id(), 2);
        assert!(store.fetch_by_email("BOB@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_replaces_and_remove() {
        let store = InMemoryUserStore::new();
        store.insert(user(1, "Alice", "alice@example.com"));
        store.insert(user(1, "Alicia", "alice@example.com"));

        assert_eq!(store.fetch_by_id(1).await.unwrap().unwrap().name(), "Alicia");
        assert!(store.remove(1).is_some());
        assert!(store.fetch_by_id(1).await.unwrap().is_none());
    }
}
