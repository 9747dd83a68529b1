//! # Strata REST
//!
//! REST API layer using Axum for the Strata user cache.
//! Provides HTTP endpoints for user lookups, cache administration, health
//! checks and Prometheus metrics.

pub mod controllers;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
