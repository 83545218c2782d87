//! Raw dataset rows.

use serde::Deserialize;

use crate::domain::{Link, normalize};

/// One row of the connections dataset, as read.
///
/// Column names are matched case-insensitively by the loader; the
/// Portuguese names used by the operator's spreadsheets are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(alias = "origem")]
    pub origin: String,

    #[serde(alias = "destino")]
    pub destination: String,

    #[serde(alias = "prefixo")]
    pub prefix: String,

    #[serde(alias = "linha")]
    pub line: String,

    /// Only present in the newer dataset layout.
    #[serde(alias = "empresa", default)]
    pub carrier: Option<String>,
}

impl RawRecord {
    /// Normalize the row into (origin, destination, link).
    ///
    /// City names are trimmed and upper-cased; attributes are trimmed, and a
    /// blank carrier is treated as absent.
    pub fn normalize(self) -> (String, String, Link) {
        let carrier = self
            .carrier
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let link = Link {
            prefix: self.prefix.trim().to_string(),
            line: self.line.trim().to_string(),
            carrier,
        };

        (normalize(&self.origin), normalize(&self.destination), link)
    }
}
