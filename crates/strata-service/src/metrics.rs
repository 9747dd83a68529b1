//! Prometheus metrics for user cache lookups.

use metrics::{counter, describe_counter};

/// Metric names for the user cache.
pub mod names {
    /// Total lookups, labelled by `lookup` and `outcome`.
    pub const LOOKUPS_TOTAL: &str = "strata_user_cache_lookups_total";
    /// Total explicit invalidations.
    pub const INVALIDATIONS_TOTAL: &str = "strata_user_cache_invalidations_total";
}

/// Which key a lookup went through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    /// `user:<id>`
    Id,
    /// `user:email:<email>`
    Email,
}

impl LookupKind {
    /// Label value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Email => "email",
        }
    }
}

/// How a lookup was served.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Served from the cache.
    Hit,
    /// Cache consulted, store read.
    Miss,
    /// Cache skipped on request.
    Bypass,
}

impl LookupOutcome {
    /// Label value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
            Self::Bypass => "bypass",
        }
    }
}

/// Register all metric descriptions.
pub fn register_metrics() {
    describe_counter!(
        names::LOOKUPS_TOTAL,
        "Total user lookups by key kind and cache outcome"
    );
    describe_counter!(
        names::INVALIDATIONS_TOTAL,
        "Total user cache invalidations"
    );
}

/// Cache metrics recorder.
#[derive(Clone)]
pub struct CacheMetrics;

impl CacheMetrics {
    /// Record a lookup.
    pub fn lookup(kind: LookupKind, outcome: LookupOutcome) {
        counter!(
            names::LOOKUPS_TOTAL,
            "lookup" => kind.as_str(),
            "outcome" => outcome.as_str()
        )
        .increment(1);
    }

    /// Record an invalidation.
    pub fn invalidation() {
        counter!(names::INVALIDATIONS_TOTAL).increment(1);
    }
}
