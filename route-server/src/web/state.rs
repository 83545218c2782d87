//! Application state for the web layer.

use std::sync::Arc;
use std::time::Duration;

use crate::network::Graph;
use crate::planner::QueryConfig;

/// Shared application state.
///
/// The graph is immutable once loaded, so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The transport network
    pub graph: Arc<Graph>,

    /// Route query configuration
    pub config: Arc<QueryConfig>,

    /// Wall-clock limit for one route query
    pub query_timeout: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(graph: Graph, config: QueryConfig, query_timeout: Duration) -> Self {
        Self {
            graph: Arc::new(graph),
            config: Arc::new(config),
            query_timeout,
        }
    }
}
