//! Headline KPI computation.

use analytics_spi::{AnalyticsError, Result, RevenueSummary};
use series_spi::RevenueSeries;

use crate::growth::growth_pct;

/// Compute the headline figures for a series: totals, mean, and the latest
/// period's revenue and growth.
pub fn summarize(series: &RevenueSeries) -> Result<RevenueSummary> {
    let revenues = series.revenues();
    if revenues.is_empty() {
        return Err(AnalyticsError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let total_revenue: f64 = revenues.iter().sum();
    let latest_growth_pct = growth_pct(&revenues)
        .last()
        .copied()
        .flatten();

    Ok(RevenueSummary {
        periods: revenues.len(),
        total_revenue,
        mean_revenue: total_revenue / revenues.len() as f64,
        latest_revenue: revenues[revenues.len() - 1],
        latest_growth_pct,
    })
}
