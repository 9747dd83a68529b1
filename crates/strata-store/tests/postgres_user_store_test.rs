//! Integration tests for `PostgresUserStore`.
//!
//! Require Docker; run with `cargo test -p strata-store -- --ignored`.

mod common;

use common::TestDatabase;
use strata_core::StrataError;
use strata_store::{PostgresUserStore, UserStore};

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_fetch_by_id() {
    let db = TestDatabase::new().await;
    let id = db.insert_user("Alice", "alice@example.com").await;
    let store = PostgresUserStore::new(db.pool());

    let user = store.fetch_by_id(id).await.unwrap().unwrap();

    assert_eq!(user.id(), id);
    assert_eq!(user.name(), "Alice");
    assert_eq!(user.email().as_str(), "alice@example.com");
    assert!(user.created_at().is_some());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_fetch_by_email() {
    let db = TestDatabase::new().await;
    let id = db.insert_user("Bob", "bob@example.com").await;
    let store = PostgresUserStore::new(db.pool());

    let user = store.fetch_by_email("bob@example.com").await.unwrap().unwrap();
    assert_eq!(user.id(), id);

    // Emails are matched exactly.
    assert!(store.fetch_by_email("BOB@example.com").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_missing_user_is_none() {
    let db = TestDatabase::new().await;
    let store = PostgresUserStore::new(db.pool());

    assert!(store.fetch_by_id(999).await.unwrap().is_none());
    assert!(store.fetch_by_email("nobody@example.com").await.unwrap().is_none());
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_invalid_row_is_validation_error() {
    let db = TestDatabase::new().await;
    let id = db.insert_user("   ", "carol@example.com").await;
    let store = PostgresUserStore::new(db.pool());

    let result = store.fetch_by_id(id).await;
    assert!(matches!(result, Err(StrataError::Validation(_))));
}

#[tokio::test]
#[ignore = "requires Docker"]
async fn test_health_check_and_closed_pool() {
    let db = TestDatabase::new().await;
    let pool = db.pool();
    pool.health_check().await.unwrap();

    pool.close().await;
    let store = PostgresUserStore::new(pool);
    let result = store.fetch_by_id(1).await;
    assert!(matches!(result, Err(StrataError::Store(_))));
}
