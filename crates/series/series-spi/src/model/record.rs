//! Revenue record type.

use serde::{Deserialize, Serialize};

/// A single observed period: one row of the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueRecord {
    /// Period label (e.g. "2024-03")
    pub period: String,
    /// Revenue booked in that period
    pub revenue: f64,
}

impl RevenueRecord {
    /// Create a new RevenueRecord.
    pub fn new(period: &str, revenue: f64) -> Self {
        Self {
            period: period.to_string(),
            revenue,
        }
    }
}
