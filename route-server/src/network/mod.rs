//! The transport network.
//!
//! Connection records are collected in an [`EdgeStore`] and folded once into
//! an immutable [`Graph`], which every query then reads.

mod edge_store;
mod graph;

pub use edge_store::{EdgeRecord, EdgeStore, InvalidRecord};
pub use graph::{Graph, UnknownNode};

pub(crate) use graph::NodeId;
