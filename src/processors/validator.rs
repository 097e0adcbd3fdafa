use crate::error::{PrismError, Result};
use crate::models::CoordinateRow;
use crate::utils::constants::MAX_ROWS_PER_REQUEST;
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::info;

/// Outcome of a successful validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub row_count: usize,
    pub needs_partition: bool,
}

/// Structural validator for bulk coordinate files.
///
/// Checks every row in file order and fails on the first malformed one;
/// errors carry the 1-indexed row number and the offending column.
pub struct CsvValidator {
    max_rows: usize,
}

impl CsvValidator {
    pub fn new() -> Self {
        Self {
            max_rows: MAX_ROWS_PER_REQUEST,
        }
    }

    pub fn with_max_rows(max_rows: usize) -> Self {
        Self { max_rows }
    }

    /// Validate the coordinate file at `path`.
    ///
    /// Read-only: the file is opened, fully scanned, and closed. On success
    /// the report says whether the file exceeds the per-request row limit
    /// and must be partitioned before submission.
    pub fn validate(&self, path: &Path) -> Result<ValidationReport> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut row_count = 0;
        let mut next_line = 1u64;
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(next_line, |p| p.line());
            // The reader skips blank lines; a gap in line numbers means the
            // source had an empty row, which has zero columns.
            if line > next_line {
                return Err(PrismError::ColumnCount {
                    row: next_line as usize,
                    found: 0,
                });
            }
            CoordinateRow::from_record(&record, line as usize)?;
            row_count += 1;
            next_line = line + 1;
        }

        // Blank lines after the last record leave the reader past the
        // expected end-of-file line.
        if reader.position().line() > next_line {
            return Err(PrismError::ColumnCount {
                row: next_line as usize,
                found: 0,
            });
        }

        let needs_partition = row_count > self.max_rows;
        info!(rows = row_count, needs_partition, "CSV validation passed");

        Ok(ValidationReport {
            row_count,
            needs_partition,
        })
    }
}

impl Default for CsvValidator {
    fn default() -> Self {
        Self::new()
    }
}
