//! Revenue Series Service Provider Interface
//!
//! Defines the data model, contracts, and errors for revenue series
//! ingestion and export.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::SeriesSource;
pub use error::{Result, SeriesError};
pub use model::{DerivedRow, RevenueRecord, RevenueSeries, SeasonalComponents};
