//! Revenue Series Core
//!
//! CSV-backed implementations of the series contracts: a reader that
//! produces validated [`series_spi::RevenueSeries`] values and a writer for
//! the derived-metrics table.

pub mod export;
pub mod reader;

pub use export::{export_derived_rows, write_derived_rows};
pub use reader::{read_series, CsvSeriesSource};
