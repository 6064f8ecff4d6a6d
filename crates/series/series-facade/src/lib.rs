//! Revenue Series Facade
//!
//! Unified re-exports for the series module.
//!
//! This facade provides a single entry point to all series functionality:
//! - `RevenueSeries`, `RevenueRecord`, `DerivedRow`, and `SeriesError` from SPI
//! - `CsvConfig` and its builder from API
//! - The CSV reader and writer (`read_series`, `CsvSeriesSource`,
//!   `write_derived_rows`) from Core

// Re-export everything from SPI
pub use series_spi::*;

// Re-export everything from API
pub use series_api::*;

// Re-export everything from Core
pub use series_core::*;
