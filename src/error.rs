use thiserror::Error;

pub type Result<T> = std::result::Result<T, PrismError>;

#[derive(Error, Debug)]
pub enum PrismError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: expected exactly 3 columns, found {found}")]
    ColumnCount { row: usize, found: usize },

    #[error("Row {row}: first column must be a float latitude, got '{value}'")]
    InvalidLatitude { row: usize, value: String },

    #[error("Row {row}: second column must be a float longitude, got '{value}'")]
    InvalidLongitude { row: usize, value: String },

    #[error("Row {row}: third column must be 12 or fewer characters, got {length}")]
    LabelTooLong { row: usize, length: usize },

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid date range: {0}")]
    InvalidDateRange(String),

    #[error("Form driver error: {0}")]
    Driver(String),
}

impl PrismError {
    /// 1-indexed row number for row-level validation failures.
    pub fn row(&self) -> Option<usize> {
        match self {
            PrismError::ColumnCount { row, .. }
            | PrismError::InvalidLatitude { row, .. }
            | PrismError::InvalidLongitude { row, .. }
            | PrismError::LabelTooLong { row, .. } => Some(*row),
            _ => None,
        }
    }
}
