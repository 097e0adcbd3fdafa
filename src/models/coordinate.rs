use crate::error::{PrismError, Result};
use crate::utils::constants::MAX_LABEL_CHARS;
use csv::StringRecord;
use serde::{Deserialize, Serialize};

/// One line of a bulk coordinate file: latitude, longitude, site label.
///
/// Latitude and longitude are kept as the source text so partition files
/// reproduce the input byte-for-byte; `from_record` checks they parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoordinateRow {
    pub latitude: String,
    pub longitude: String,
    pub label: String,
}

impl CoordinateRow {
    /// Parse and validate a CSV record. `row` is the 1-indexed position in
    /// the source file, reported in every error.
    pub fn from_record(record: &StringRecord, row: usize) -> Result<Self> {
        if record.len() != 3 {
            return Err(PrismError::ColumnCount {
                row,
                found: record.len(),
            });
        }

        if record[0].parse::<f64>().is_err() {
            return Err(PrismError::InvalidLatitude {
                row,
                value: record[0].to_string(),
            });
        }

        if record[1].parse::<f64>().is_err() {
            return Err(PrismError::InvalidLongitude {
                row,
                value: record[1].to_string(),
            });
        }

        let label_chars = record[2].chars().count();
        if label_chars > MAX_LABEL_CHARS {
            return Err(PrismError::LabelTooLong {
                row,
                length: label_chars,
            });
        }

        Ok(Self {
            latitude: record[0].to_string(),
            longitude: record[1].to_string(),
            label: record[2].to_string(),
        })
    }
}
