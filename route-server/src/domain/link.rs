//! Service link attributes.

use serde::Serialize;

/// The service attributes carried by an edge between two cities.
///
/// `carrier` is only present in datasets that record it; one `Link` shape
/// serves every dataset variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Link {
    /// Service prefix (the operator's registration number for the line)
    pub prefix: String,
    /// Line name
    pub line: String,
    /// Operating carrier, when the dataset records one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carrier: Option<String>,
}

impl Link {
    /// Creates a link without a carrier.
    pub fn new(prefix: impl Into<String>, line: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            line: line.into(),
            carrier: None,
        }
    }

    /// Sets the carrier.
    pub fn with_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carrier = Some(carrier.into());
        self
    }
}
