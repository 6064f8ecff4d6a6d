//! Per-period seasonal decomposition view.

use serde::{Deserialize, Serialize};

/// Additive decomposition components for one period:
/// `revenue = trend + seasonal + residual` wherever all three are defined.
///
/// `trend` and `residual` are `None` at the series edges where the centered
/// moving-average window does not fit (exactly `period / 2` entries at each
/// end). The seasonal component is replicated across every period and is
/// always defined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalComponents {
    /// Centered moving-average trend, where defined.
    pub trend: Option<f64>,
    /// Repeating seasonal offset for this period's phase.
    pub seasonal: f64,
    /// Remainder after removing trend and seasonal, where trend is defined.
    pub residual: Option<f64>,
}

impl SeasonalComponents {
    /// Reassemble the observed value, where the decomposition is defined.
    pub fn reconstructed(&self) -> Option<f64> {
        match (self.trend, self.residual) {
            (Some(t), Some(r)) => Some(t + self.seasonal + r),
            _ => None,
        }
    }
}
