//! Contracts for revenue series providers.

mod series_source;

pub use series_source::SeriesSource;
