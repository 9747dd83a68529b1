//! Caching infrastructure for the service layer.
//!
//! A string-keyed cache port with Redis and in-process implementations.

mod cache_interface;
pub mod cache_keys;
mod memory_cache;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use memory_cache::MemoryCache;
pub use redis_cache::{create_redis_pool, RedisCache};
