//! Undirected city graph.

use std::collections::HashMap;

use crate::domain::{City, Link};

use super::EdgeStore;

/// Error returned when asking about a city that is not in the graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown node: {0}")]
pub struct UnknownNode(pub City);

/// Dense node index, assigned in first-insertion order.
pub(crate) type NodeId = usize;

/// An undirected graph of cities joined by service links.
///
/// Links are symmetric: the link from A to B is the link from B to A.
/// Only one link is kept per city pair; adding another overwrites it.
///
/// Neighbors are iterated in the order their link to the node was first
/// added. Overwriting a link does not reorder anything.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    cities: Vec<City>,
    ids: HashMap<City, NodeId>,
    adjacency: Vec<Vec<NodeId>>,
    /// Keyed by (smaller id, larger id).
    links: HashMap<(NodeId, NodeId), Link>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from every record in a store, in store order.
    pub fn from_store(store: &EdgeStore) -> Self {
        let mut graph = Self::new();
        for record in store.iter() {
            graph.add_edge(
                record.origin.clone(),
                record.destination.clone(),
                record.link.clone(),
            );
        }
        graph
    }

    /// Add a link between two cities, inserting either city if absent.
    ///
    /// An existing link for the same pair is replaced. When `a == b` the
    /// city is registered but no link is recorded.
    pub fn add_edge(&mut self, a: City, b: City, link: Link) {
        let a = self.intern(a);
        let b = self.intern(b);
        if a == b {
            return;
        }

        let key = (a.min(b), a.max(b));
        if self.links.insert(key, link).is_none() {
            self.adjacency[a].push(b);
            self.adjacency[b].push(a);
        }
    }

    /// Check whether a city is a node of the graph.
    pub fn has_node(&self, city: &City) -> bool {
        self.ids.contains_key(city)
    }

    /// Iterate over the neighbors of a city.
    pub fn neighbors<'g>(
        &'g self,
        city: &City,
    ) -> Result<impl Iterator<Item = &'g City> + use<'g>, UnknownNode> {
        let id = self
            .node_id(city)
            .ok_or_else(|| UnknownNode(city.clone()))?;
        Ok(self.adjacency[id].iter().map(move |&n| &self.cities[n]))
    }

    /// Get the link between two cities, if they are adjacent.
    pub fn edge_attrs(&self, a: &City, b: &City) -> Option<&Link> {
        self.link_between(self.node_id(a)?, self.node_id(b)?)
    }

    /// Iterate over all cities in insertion order.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }

    /// Returns the number of cities.
    pub fn node_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns the number of distinct city pairs with a link.
    pub fn edge_count(&self) -> usize {
        self.links.len()
    }

    pub(crate) fn node_id(&self, city: &City) -> Option<NodeId> {
        self.ids.get(city).copied()
    }

    pub(crate) fn city(&self, id: NodeId) -> &City {
        &self.cities[id]
    }

    pub(crate) fn neighbor_ids(&self, id: NodeId) -> &[NodeId] {
        &self.adjacency[id]
    }

    pub(crate) fn link_between(&self, a: NodeId, b: NodeId) -> Option<&Link> {
        self.links.get(&(a.min(b), a.max(b)))
    }

    fn intern(&mut self, city: City) -> NodeId {
        if let Some(&id) = self.ids.get(&city) {
            return id;
        }
        let id = self.cities.len();
        self.cities.push(city.clone());
        self.ids.insert(city, id);
        self.adjacency.push(Vec::new());
        id
    }
}

impl From<&EdgeStore> for Graph {
    fn from(store: &EdgeStore) -> Self {
        Self::from_store(store)
    }
}
