//! Edge store: the validated connection records a graph is built from.

use crate::domain::{City, Link};

/// Error returned when a connection record cannot be stored.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid record: {reason}")]
pub struct InvalidRecord {
    reason: String,
}

impl InvalidRecord {
    /// Returns why the record was rejected.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A single stored connection between two cities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub origin: City,
    pub destination: City,
    pub link: Link,
}

/// An ordered collection of connection records.
///
/// Records are kept exactly as added, duplicates included. Folding
/// duplicates is the graph's job.
#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    records: Vec<EdgeRecord>,
}

impl EdgeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a connection record.
    ///
    /// Both endpoints must be normalized, non-empty city names, and they
    /// must differ.
    pub fn add(
        &mut self,
        origin: &str,
        destination: &str,
        link: Link,
    ) -> Result<(), InvalidRecord> {
        let origin = City::parse(origin).map_err(|e| InvalidRecord {
            reason: format!("origin: {e}"),
        })?;
        let destination = City::parse(destination).map_err(|e| InvalidRecord {
            reason: format!("destination: {e}"),
        })?;

        if origin == destination {
            return Err(InvalidRecord {
                reason: format!("origin and destination are both {origin}"),
            });
        }

        self.records.push(EdgeRecord {
            origin,
            destination,
            link,
        });
        Ok(())
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &EdgeRecord> {
        self.records.iter()
    }

    /// Returns the number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if no records are stored.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store() {
        let store = EdgeStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.iter().count(), 0);
    }

    #[test]
    fn add_keeps_order_and_duplicates() {
        let mut store = EdgeStore::new();
        store.add("A", "B", Link::new("101", "X")).unwrap();
        store.add("B", "C", Link::new("202", "Y")).unwrap();
        store.add("A", "B", Link::new("303", "Z")).unwrap();

        assert_eq!(store.len(), 3);
        let prefixes: Vec<&str> = store.iter().map(|r| r.link.prefix.as_str()).collect();
        assert_eq!(prefixes, vec!["101", "202", "303"]);
    }

    #[test]
    fn reject_empty_endpoint() {
        let mut store = EdgeStore::new();

        let err = store.add("", "B", Link::new("1", "L")).unwrap_err();
        assert_eq!(err.reason(), "origin: invalid city name: must not be empty");

        let err = store.add("A", "", Link::new("1", "L")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid record: destination: invalid city name: must not be empty"
        );

        assert!(store.is_empty());
    }

    #[test]
    fn reject_unnormalized_endpoint() {
        let mut store = EdgeStore::new();
        assert!(store.add(" A", "B", Link::new("1", "L")).is_err());
        assert!(store.add("A", "b", Link::new("1", "L")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn reject_self_loop() {
        let mut store = EdgeStore::new();
        let err = store.add("A", "A", Link::new("1", "L")).unwrap_err();
        assert_eq!(err.reason(), "origin and destination are both A");
        assert!(store.is_empty());
    }

    #[test]
    fn rejection_does_not_affect_other_records() {
        let mut store = EdgeStore::new();
        store.add("A", "B", Link::new("1", "L")).unwrap();
        assert!(store.add("", "B", Link::new("2", "L")).is_err());
        store.add("B", "C", Link::new("3", "L")).unwrap();
        assert_eq!(store.len(), 2);
    }
}
