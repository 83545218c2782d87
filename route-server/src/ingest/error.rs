//! Ingestion error types.

use std::path::PathBuf;

/// Errors that stop ingestion entirely.
///
/// Problems with individual rows are not errors; they are collected in
/// the [`IngestReport`](super::IngestReport).
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The dataset file could not be opened
    #[error("failed to open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The CSV stream could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
