//! CSV dataset loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{info, warn};

use crate::network::EdgeStore;

use super::error::IngestError;
use super::record::RawRecord;

/// A row that was skipped during ingestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRow {
    /// 1-based data row number (the header is not counted).
    pub row: usize,
    /// Why the row was skipped.
    pub reason: String,
}

/// Outcome of loading a dataset.
#[derive(Debug, Clone, Default)]
pub struct IngestReport {
    /// Every accepted record, in file order.
    pub store: EdgeStore,
    /// Every skipped row, in file order.
    pub rejected: Vec<RejectedRow>,
}

impl IngestReport {
    /// Returns the number of accepted records.
    pub fn accepted(&self) -> usize {
        self.store.len()
    }
}

/// Load a connections dataset from a CSV file.
pub fn load_csv(path: impl AsRef<Path>) -> Result<IngestReport, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let report = read_records(file)?;
    info!(
        path = %path.display(),
        accepted = report.accepted(),
        rejected = report.rejected.len(),
        "dataset loaded"
    );
    Ok(report)
}

/// Read connection rows from any CSV source.
///
/// The first line must be a header. Header names are matched
/// case-insensitively. Rows that fail to decode or validate are skipped and
/// listed in the report; only an unreadable stream is an error.
pub fn read_records<R: Read>(source: R) -> Result<IngestReport, IngestError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .from_reader(source);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect();
    reader.set_headers(StringRecord::from(headers));

    let mut report = IngestReport::default();

    for (index, result) in reader.deserialize::<RawRecord>().enumerate() {
        let row = index + 1;

        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                reject(&mut report, row, e.to_string());
                continue;
            }
        };

        let (origin, destination, link) = record.normalize();
        if let Err(e) = report.store.add(&origin, &destination, link) {
            reject(&mut report, row, e.to_string());
        }
    }

    Ok(report)
}

fn reject(report: &mut IngestReport, row: usize, reason: String) {
    warn!(row, reason = %reason, "skipping dataset row");
    report.rejected.push(RejectedRow { row, reason });
}
