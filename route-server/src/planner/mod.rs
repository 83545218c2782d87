//! Route planner using bounded depth-first enumeration.
//!
//! This module implements the core query that answers:
//! "Which routes lead from this city to that one in at most K hops?"
//!
//! Every simple path within the hop bound is enumerated, then the routes
//! are ranked by hop count.

mod config;
mod enumerate;
mod query;
mod rank;

pub use config::QueryConfig;
pub use enumerate::{
    CancelFlag, EnumerateError, EnumerateParams, Enumeration, Interrupt, NoInterrupt,
    SearchInterrupted, enumerate_routes,
};
pub use query::{QueryError, Role, RouteFinder, RouteSet};
pub use rank::rank_routes;
