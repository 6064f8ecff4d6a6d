//! Full analysis report model.

use serde::{Deserialize, Serialize};
use series_spi::DerivedRow;

use crate::model::{Decomposition, RevenueSummary, TrendCoefficients};

/// Everything the pipeline computes for one input series: the contract
/// between the analytics layer and any presentation or reporting consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Headline KPIs.
    pub summary: RevenueSummary,
    /// Derived-metrics table, one row per input period.
    pub rows: Vec<DerivedRow>,
    /// Fitted trend line.
    pub trend: TrendCoefficients,
    /// Seasonal decomposition, present when the pipeline was configured
    /// with a seasonal period.
    pub decomposition: Option<Decomposition>,
}

impl AnalysisReport {
    /// Periods flagged as anomalous.
    pub fn anomalous_periods(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|row| row.anomaly)
            .map(|row| row.period.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anomalous_periods() {
        let report = AnalysisReport {
            summary: RevenueSummary {
                periods: 2,
                total_revenue: 210.0,
                mean_revenue: 105.0,
                latest_revenue: 110.0,
                latest_growth_pct: Some(10.0),
            },
            rows: vec![
                DerivedRow {
                    period: "2024-01".to_string(),
                    revenue: 100.0,
                    growth_pct: None,
                    predicted_revenue: 100.0,
                    anomaly: false,
                },
                DerivedRow {
                    period: "2024-02".to_string(),
                    revenue: 110.0,
                    growth_pct: Some(10.0),
                    predicted_revenue: 110.0,
                    anomaly: true,
                },
            ],
            trend: TrendCoefficients {
                slope: 10.0,
                intercept: 100.0,
                r_squared: 1.0,
            },
            decomposition: None,
        };

        assert_eq!(report.anomalous_periods(), vec!["2024-02"]);
    }
}
