//! Domain types for the route finder.
//!
//! This module contains the core domain model types: cities, the service
//! links between them, and the routes built from those links. Types enforce
//! their invariants at construction time, so code that receives them can
//! trust their validity.

mod city;
mod error;
mod link;
mod route;

pub use city::{City, InvalidCity, normalize};
pub use error::DomainError;
pub use link::Link;
pub use route::{Route, RouteSegment};
