//! Error types for revenue series operations.

mod series_error;

pub use series_error::{Result, SeriesError};
