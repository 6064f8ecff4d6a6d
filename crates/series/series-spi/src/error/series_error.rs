//! Revenue series error types.

use thiserror::Error;

/// Errors raised while reading, validating, or writing a revenue series.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SeriesError {
    /// Reading the underlying source failed
    #[error("Failed to read series: {0}")]
    ReadFailed(String),

    /// The header row lacks a required column
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// A revenue cell did not parse as a number
    #[error("Row {row}: revenue '{value}' is not a number")]
    InvalidRevenue { row: usize, value: String },

    /// A revenue value parsed but is NaN or infinite
    #[error("Period '{period}': revenue is not finite")]
    NonFiniteRevenue { period: String },

    /// The same period label appears more than once
    #[error("Duplicate period label '{0}'")]
    DuplicatePeriod(String),

    /// A period label is empty or whitespace
    #[error("Empty period label at row {0}")]
    EmptyPeriodLabel(usize),

    /// ISO month labels are not strictly increasing
    #[error("Periods out of order: '{prev}' followed by '{next}'")]
    OutOfOrder { prev: String, next: String },

    /// The source contains no data rows
    #[error("Series contains no data rows")]
    Empty,

    /// Writing the output failed
    #[error("Failed to write series: {0}")]
    WriteFailed(String),
}

/// Result type for series operations.
pub type Result<T> = std::result::Result<T, SeriesError>;
