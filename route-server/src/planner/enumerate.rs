//! Depth-bounded simple-path enumeration.
//!
//! A depth-first search from the origin that records every simple path
//! reaching the destination within the hop bound. The current path and the
//! visited set are pushed before each recursive step and popped after it,
//! so sibling branches never see each other's state.
//!
//! Neighbors are tried in the graph's neighbor order (first-insertion
//! order), which fixes the order in which equal-length routes are emitted.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use crate::domain::{City, Route, RouteSegment};
use crate::network::{Graph, NodeId, UnknownNode};

/// A cooperative stop signal, polled once per expanded node.
pub trait Interrupt {
    /// Returns true once the search should stop.
    fn is_interrupted(&self) -> bool;
}

/// Never interrupts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterrupt;

impl Interrupt for NoInterrupt {
    fn is_interrupted(&self) -> bool {
        false
    }
}

/// A shareable cancellation flag.
///
/// Clones share the same flag, so one clone can be handed to a running
/// search while another is kept to cancel it.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a flag that is not yet cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask every search holding this flag to stop.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether `cancel` has been called.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Interrupt for CancelFlag {
    fn is_interrupted(&self) -> bool {
        self.is_cancelled()
    }
}

/// Why an enumeration stopped before finishing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchInterrupted {
    /// The caller's interrupt fired
    #[error("search was cancelled")]
    Cancelled,

    /// The node-expansion budget ran out
    #[error("search exceeded its budget of {limit} node expansions")]
    BudgetExhausted { limit: usize },
}

/// Error from route enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnumerateError {
    /// Origin or destination is not in the graph
    #[error(transparent)]
    UnknownNode(#[from] UnknownNode),

    /// The search was stopped early
    #[error(transparent)]
    Interrupted(#[from] SearchInterrupted),
}

/// Parameters for enumeration, bundled for a cleaner function signature.
#[derive(Debug, Clone, Copy)]
pub struct EnumerateParams<'a> {
    pub origin: &'a City,
    pub destination: &'a City,
    /// Inclusive upper bound on the number of hops in a route.
    pub max_hops: usize,
    /// Node-expansion budget; `None` means unbounded.
    pub max_expansions: Option<usize>,
}

/// Result of enumeration: routes in emission order and the work done.
#[derive(Debug, Clone)]
pub struct Enumeration {
    pub routes: Vec<Route>,
    pub nodes_expanded: usize,
}

/// Enumerate every simple route from origin to destination with at most
/// `max_hops` hops.
///
/// Routes are returned in the order the search reaches the destination;
/// no ranking is applied. A query whose origin equals its destination
/// yields no routes.
pub fn enumerate_routes<I: Interrupt + ?Sized>(
    graph: &Graph,
    params: &EnumerateParams<'_>,
    interrupt: &I,
) -> Result<Enumeration, EnumerateError> {
    let origin = graph
        .node_id(params.origin)
        .ok_or_else(|| UnknownNode(params.origin.clone()))?;
    let target = graph
        .node_id(params.destination)
        .ok_or_else(|| UnknownNode(params.destination.clone()))?;

    if origin == target {
        return Ok(Enumeration {
            routes: Vec::new(),
            nodes_expanded: 0,
        });
    }

    let mut dfs = Dfs {
        graph,
        target,
        max_hops: params.max_hops,
        max_expansions: params.max_expansions,
        interrupt,
        path: Vec::with_capacity(params.max_hops + 1),
        visited: vec![false; graph.node_count()],
        routes: Vec::new(),
        nodes_expanded: 0,
    };

    dfs.path.push(origin);
    dfs.visited[origin] = true;
    dfs.visit(origin)?;

    debug!(
        origin = %params.origin,
        destination = %params.destination,
        max_hops = params.max_hops,
        routes = dfs.routes.len(),
        nodes_expanded = dfs.nodes_expanded,
        "enumeration complete"
    );

    Ok(Enumeration {
        routes: dfs.routes,
        nodes_expanded: dfs.nodes_expanded,
    })
}

/// Search state for one enumeration.
struct Dfs<'a, I: ?Sized> {
    graph: &'a Graph,
    target: NodeId,
    max_hops: usize,
    max_expansions: Option<usize>,
    interrupt: &'a I,
    /// Cities on the current branch, origin first.
    path: Vec<NodeId>,
    /// Indexed by node id; mirrors `path`.
    visited: Vec<bool>,
    routes: Vec<Route>,
    nodes_expanded: usize,
}

impl<I: Interrupt + ?Sized> Dfs<'_, I> {
    /// Expand `node`, the last city of `path`.
    fn visit(&mut self, node: NodeId) -> Result<(), SearchInterrupted> {
        self.nodes_expanded += 1;
        if let Some(limit) = self.max_expansions {
            if self.nodes_expanded > limit {
                return Err(SearchInterrupted::BudgetExhausted { limit });
            }
        }
        if self.interrupt.is_interrupted() {
            return Err(SearchInterrupted::Cancelled);
        }

        // A route ends at its first arrival at the destination.
        if node == self.target {
            self.emit();
            return Ok(());
        }

        if self.path.len() - 1 >= self.max_hops {
            return Ok(());
        }

        let graph = self.graph;
        for &next in graph.neighbor_ids(node) {
            if self.visited[next] {
                continue;
            }

            self.path.push(next);
            self.visited[next] = true;
            let result = self.visit(next);
            self.visited[next] = false;
            self.path.pop();
            result?;
        }

        Ok(())
    }

    /// Record the current path as a route.
    fn emit(&mut self) {
        let graph = self.graph;
        let segments: Option<Vec<RouteSegment>> = self
            .path
            .windows(2)
            .map(|hop| {
                let link = graph.link_between(hop[0], hop[1])?;
                Some(RouteSegment::new(
                    graph.city(hop[0]).clone(),
                    graph.city(hop[1]).clone(),
                    link.clone(),
                ))
            })
            .collect();

        let Some(segments) = segments else {
            debug_assert!(false, "hop without a link on path {:?}", self.path);
            return;
        };
        match Route::new(segments) {
            Ok(route) => {
                trace!(hops = route.hop_count(), "route found");
                self.routes.push(route);
            }
            Err(e) => debug_assert!(false, "path {:?} is not a route: {e}", self.path),
        }
    }
}
