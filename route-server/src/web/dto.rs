//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Route, RouteSegment};

/// Request to find routes.
///
/// Absent names deserialize as empty so the planner can report them.
#[derive(Debug, Deserialize)]
pub struct FindRoutesRequest {
    /// Origin city name
    #[serde(default)]
    pub origin: String,

    /// Destination city name
    #[serde(default)]
    pub destination: String,

    /// Maximum number of hops (defaults to the configured default)
    pub max_hops: Option<usize>,
}

/// Response for a route query.
#[derive(Debug, Serialize)]
pub struct FindRoutesResponse {
    /// Normalized origin
    pub origin: String,

    /// Normalized destination
    pub destination: String,

    /// Hop limit the query ran with
    pub max_hops: usize,

    /// Found routes, fewest hops first
    pub routes: Vec<RouteResult>,
}

/// A route option.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Number of hops
    pub hops: usize,

    /// Hops in travel order
    pub segments: Vec<SegmentResult>,
}

/// One hop of a route.
#[derive(Debug, Serialize)]
pub struct SegmentResult {
    pub from: String,
    pub to: String,
    pub prefix: String,
    pub line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
}

/// Response listing known cities.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    /// City names, sorted
    pub cities: Vec<String>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl From<&Route> for RouteResult {
    fn from(route: &Route) -> Self {
        Self {
            hops: route.hop_count(),
            segments: route.segments().iter().map(SegmentResult::from).collect(),
        }
    }
}

impl From<&RouteSegment> for SegmentResult {
    fn from(segment: &RouteSegment) -> Self {
        Self {
            from: segment.from.to_string(),
            to: segment.to.to_string(),
            prefix: segment.link.prefix.clone(),
            line: segment.link.line.clone(),
            carrier: segment.link.carrier.clone(),
        }
    }
}
