//! Data models for revenue series.

mod derived_row;
mod record;
mod seasonal;
mod series;

pub use derived_row::DerivedRow;
pub use record::RevenueRecord;
pub use seasonal::SeasonalComponents;
pub use series::RevenueSeries;
