//! Route types.
//!
//! A `Route` is a simple path through the network: an ordered list of
//! hops, each carrying the service link that connects its two cities.

use std::collections::HashSet;
use std::fmt;

use super::{City, DomainError, Link};

/// One hop of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSegment {
    /// City the hop departs from
    pub from: City,
    /// City the hop arrives at
    pub to: City,
    /// Service link used for the hop
    pub link: Link,
}

impl RouteSegment {
    /// Creates a new segment.
    pub fn new(from: City, to: City, link: Link) -> Self {
        Self { from, to, link }
    }
}

impl fmt::Display for RouteSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} | Prefix: {} | Line: {}",
            self.from, self.to, self.link.prefix, self.link.line
        )?;
        if let Some(carrier) = &self.link.carrier {
            write!(f, " | Carrier: {carrier}")?;
        }
        Ok(())
    }
}

/// A simple path from an origin to a destination.
///
/// # Invariants
///
/// - At least one segment
/// - Consecutive segments connect (`to` of one = `from` of the next)
/// - No city appears twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    segments: Vec<RouteSegment>,
}

impl Route {
    /// Constructs a route, checking its invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::domain::{City, Link, Route, RouteSegment};
    ///
    /// let a = City::parse("A").unwrap();
    /// let b = City::parse("B").unwrap();
    /// let c = City::parse("C").unwrap();
    ///
    /// let route = Route::new(vec![
    ///     RouteSegment::new(a.clone(), b.clone(), Link::new("101", "X")),
    ///     RouteSegment::new(b, c.clone(), Link::new("202", "Y")),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(route.hop_count(), 2);
    /// assert_eq!(route.origin(), &a);
    /// assert_eq!(route.destination(), &c);
    /// ```
    pub fn new(segments: Vec<RouteSegment>) -> Result<Self, DomainError> {
        let first = segments.first().ok_or(DomainError::EmptyRoute)?;

        for window in segments.windows(2) {
            if window[0].to != window[1].from {
                return Err(DomainError::Disconnected(
                    window[0].to.clone(),
                    window[1].from.clone(),
                ));
            }
        }

        let mut seen = HashSet::with_capacity(segments.len() + 1);
        seen.insert(&first.from);
        for segment in &segments {
            if !seen.insert(&segment.to) {
                return Err(DomainError::RepeatedCity(segment.to.clone()));
            }
        }

        Ok(Route { segments })
    }

    /// Returns all segments in order.
    pub fn segments(&self) -> &[RouteSegment] {
        &self.segments
    }

    /// Returns the number of hops (edges) in the route.
    pub fn hop_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the first city.
    pub fn origin(&self) -> &City {
        &self.segments[0].from
    }

    /// Returns the last city.
    pub fn destination(&self) -> &City {
        &self.segments[self.segments.len() - 1].to
    }

    /// Returns every city on the route, origin first.
    pub fn cities(&self) -> impl Iterator<Item = &City> {
        std::iter::once(self.origin()).chain(self.segments.iter().map(|s| &s.to))
    }
}
