//! Domain error types.
//!
//! These errors represent violated route invariants. They are distinct
//! from query validation errors, which live with the planner.

use super::City;

/// Domain-level errors for route construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// Route has no segments
    #[error("route must have at least one segment")]
    EmptyRoute,

    /// Consecutive segments don't share an endpoint
    #[error("segments ending at {0} and starting at {1} do not connect")]
    Disconnected(City, City),

    /// A city appears twice in the same route
    #[error("city {0} is visited more than once")]
    RepeatedCity(City),
}
