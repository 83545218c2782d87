//! Query configuration for the route finder.

use std::ops::RangeInclusive;

/// Configuration parameters for route queries.
#[derive(Debug, Clone)]
pub struct QueryConfig {
    /// Largest accepted `max_hops` value.
    /// Requests above this are rejected before any search runs.
    pub max_hops_limit: usize,

    /// Hop limit used when a caller doesn't specify one.
    pub default_max_hops: usize,

    /// Maximum number of nodes a single enumeration may expand.
    /// `None` means unbounded.
    pub max_expansions: Option<usize>,
}

impl QueryConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        max_hops_limit: usize,
        default_max_hops: usize,
        max_expansions: Option<usize>,
    ) -> Self {
        Self {
            max_hops_limit,
            default_max_hops,
            max_expansions,
        }
    }

    /// Returns the accepted range of `max_hops`.
    pub fn hop_range(&self) -> RangeInclusive<usize> {
        1..=self.max_hops_limit
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            max_hops_limit: 5,
            default_max_hops: 3,
            max_expansions: None,
        }
    }
}
