//! # Strata Core
//!
//! Core types and error definitions for the Strata user cache.
//! This crate holds the `User` entity, its validation rules, and the
//! error taxonomy shared by the store, cache and HTTP layers.

pub mod domain;
pub mod error;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use result::*;
pub use traits::*;
