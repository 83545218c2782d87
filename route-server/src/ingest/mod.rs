//! Dataset ingestion.
//!
//! Reads connection rows from a CSV file, normalizes them and collects them
//! into an [`EdgeStore`](crate::network::EdgeStore). Bad rows are reported,
//! not fatal.

mod error;
mod loader;
mod record;

pub use error::IngestError;
pub use loader::{IngestReport, RejectedRow, load_csv, read_records};
pub use record::RawRecord;
