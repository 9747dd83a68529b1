//! # Strata Store
//!
//! Read access to the durable user store.
//!
//! ```text
//! CachedUserService
//!   ↓  Arc<dyn UserStore>     (store port)
//! PostgresUserStore           (sqlx / PostgreSQL)
//!   ↓
//! PostgreSQL `users` table
//! ```
//!
//! [`InMemoryUserStore`] implements the same port over a map and backs the
//! service and HTTP tests.

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod traits;

pub use memory::InMemoryUserStore;
pub use pool::*;
pub use postgres::*;
pub use traits::*;
