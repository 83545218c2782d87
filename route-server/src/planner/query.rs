//! Route query entry point.
//!
//! Validates a query, enumerates the matching routes and ranks them.

use std::fmt;

use tracing::debug;

use crate::domain::{City, Route, normalize};
use crate::network::{Graph, UnknownNode};

use super::config::QueryConfig;
use super::enumerate::{
    EnumerateError, EnumerateParams, Interrupt, NoInterrupt, SearchInterrupted, enumerate_routes,
};
use super::rank::rank_routes;

/// Which end of a query an input belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Origin,
    Destination,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Origin => f.write_str("origin"),
            Role::Destination => f.write_str("destination"),
        }
    }
}

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// `max_hops` outside the configured range
    #[error("max_hops must be between {min} and {max}, got {value}")]
    InvalidParameter { value: usize, min: usize, max: usize },

    /// Origin or destination is blank
    #[error("{0} is required")]
    MissingInput(Role),

    /// Origin and destination name the same city
    #[error("origin and destination are both {0}")]
    SameCity(String),

    /// Origin or destination is not in the network
    #[error("{role} city {city} is not in the network")]
    UnknownCity { role: Role, city: String },

    /// The search was stopped early
    #[error(transparent)]
    Interrupted(#[from] SearchInterrupted),
}

/// Result of a route query.
#[derive(Debug, Clone)]
pub struct RouteSet {
    /// Found routes, fewest hops first.
    pub routes: Vec<Route>,

    /// Number of nodes expanded during search.
    pub nodes_expanded: usize,
}

impl RouteSet {
    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no route was found.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Route finder over an immutable graph.
///
/// Holds only shared references, so any number of finders may query the
/// same graph concurrently.
pub struct RouteFinder<'a> {
    graph: &'a Graph,
    config: &'a QueryConfig,
}

impl<'a> RouteFinder<'a> {
    /// Create a new route finder.
    pub fn new(graph: &'a Graph, config: &'a QueryConfig) -> Self {
        Self { graph, config }
    }

    /// Find every simple route from `origin` to `destination` with at most
    /// `max_hops` hops, fewest hops first.
    ///
    /// City names are trimmed and upper-cased before lookup.
    pub fn find_routes(
        &self,
        origin: &str,
        destination: &str,
        max_hops: usize,
    ) -> Result<RouteSet, QueryError> {
        self.find_routes_with(origin, destination, max_hops, &NoInterrupt)
    }

    /// Like [`find_routes`](Self::find_routes), polling `interrupt` at every
    /// expanded node.
    pub fn find_routes_with<I: Interrupt + ?Sized>(
        &self,
        origin: &str,
        destination: &str,
        max_hops: usize,
        interrupt: &I,
    ) -> Result<RouteSet, QueryError> {
        let hop_range = self.config.hop_range();
        if !hop_range.contains(&max_hops) {
            return Err(QueryError::InvalidParameter {
                value: max_hops,
                min: *hop_range.start(),
                max: *hop_range.end(),
            });
        }

        let origin_name = normalize(origin);
        if origin_name.is_empty() {
            return Err(QueryError::MissingInput(Role::Origin));
        }
        let destination_name = normalize(destination);
        if destination_name.is_empty() {
            return Err(QueryError::MissingInput(Role::Destination));
        }

        if origin_name == destination_name {
            return Err(QueryError::SameCity(origin_name));
        }

        let origin = self.lookup(origin_name, Role::Origin)?;
        let destination = self.lookup(destination_name, Role::Destination)?;

        let params = EnumerateParams {
            origin: &origin,
            destination: &destination,
            max_hops,
            max_expansions: self.config.max_expansions,
        };
        let enumeration =
            enumerate_routes(self.graph, &params, interrupt).map_err(|e| match e {
                EnumerateError::UnknownNode(UnknownNode(city)) => {
                    let role = if city == origin {
                        Role::Origin
                    } else {
                        Role::Destination
                    };
                    QueryError::UnknownCity {
                        role,
                        city: city.to_string(),
                    }
                }
                EnumerateError::Interrupted(reason) => QueryError::Interrupted(reason),
            })?;

        let routes = rank_routes(enumeration.routes);

        debug!(
            origin = %origin,
            destination = %destination,
            max_hops,
            routes = routes.len(),
            "route query answered"
        );

        Ok(RouteSet {
            routes,
            nodes_expanded: enumeration.nodes_expanded,
        })
    }

    /// Resolve a normalized name to a city of the graph.
    fn lookup(&self, name: String, role: Role) -> Result<City, QueryError> {
        match City::parse(&name) {
            Ok(city) if self.graph.has_node(&city) => Ok(city),
            _ => Err(QueryError::UnknownCity { role, city: name }),
        }
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
