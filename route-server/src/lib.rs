//! Route finder server.
//!
//! A web application that answers: "Which bus routes take me from this
//! city to that one with at most K connections?"

pub mod domain;
pub mod ingest;
pub mod network;
pub mod planner;
pub mod settings;
pub mod web;
