//! User service implementations.
//!
//! The trait definition lives in the parent module (`user_service.rs`).

pub mod cached_user_service;

pub use cached_user_service::CachedUserService;
