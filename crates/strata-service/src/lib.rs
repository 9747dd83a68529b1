//! # Strata Service
//!
//! Cache-aside lookups of users in front of the durable store.
//!
//! ```text
//! caller
//!   ↓  Arc<dyn UserService>
//! CachedUserService ──→ Arc<dyn CacheInterface>   (RedisCache | MemoryCache)
//!   ↓
//! Arc<dyn UserStore>                              (PostgresUserStore | InMemoryUserStore)
//! ```

pub mod cache;
pub mod r#impl;
pub mod metrics;
pub mod user_service;

pub use cache::*;
pub use r#impl::CachedUserService;
pub use user_service::*;
