//! Derived metrics table row.

use serde::{Deserialize, Serialize};

/// One row of the derived-metrics table handed to a presentation or
/// reporting layer. The table always has exactly one row per input period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedRow {
    /// Period label, copied from the input series.
    pub period: String,
    /// Observed revenue.
    pub revenue: f64,
    /// Percentage change against the previous period. `None` for the first
    /// period, and `None` when the previous revenue is zero (undefined
    /// growth rather than an error).
    pub growth_pct: Option<f64>,
    /// Revenue predicted by the fitted trend line at this period's index.
    pub predicted_revenue: f64,
    /// Whether this period was flagged as a statistical outlier.
    pub anomaly: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_period_has_no_growth() {
        let row = DerivedRow {
            period: "2024-01".to_string(),
            revenue: 100.0,
            growth_pct: None,
            predicted_revenue: 101.5,
            anomaly: false,
        };
        assert!(row.growth_pct.is_none());
        assert!(!row.anomaly);
    }
}
