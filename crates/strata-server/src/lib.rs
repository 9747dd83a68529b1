//! # Strata Server Library
//!
//! Wiring for the Strata user cache server: builds the store, cache and
//! lookup service from configuration, plus startup utilities.

pub mod di;
pub mod startup;
