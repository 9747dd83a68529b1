//! # Strata Config
//!
//! Configuration management for the Strata user cache.
//! Supports layered configuration from files and environment variables,
//! validated once at startup.

mod app_config;
mod loader;
pub mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::{ConfigValidationError, ConfigValidator};
