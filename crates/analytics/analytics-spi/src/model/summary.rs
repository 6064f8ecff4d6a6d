//! Headline KPI summary.

use serde::{Deserialize, Serialize};

/// Headline figures over the whole series, the numbers a dashboard puts in
/// its top tiles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSummary {
    /// Number of periods covered.
    pub periods: usize,
    /// Sum of revenue over all periods.
    pub total_revenue: f64,
    /// Mean revenue per period.
    pub mean_revenue: f64,
    /// Revenue of the most recent period.
    pub latest_revenue: f64,
    /// Growth of the most recent period against its predecessor.
    /// `None` for a single-period series or when the predecessor is zero.
    pub latest_growth_pct: Option<f64>,
}
