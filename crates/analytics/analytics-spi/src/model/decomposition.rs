//! Seasonal decomposition result model.

use serde::{Deserialize, Serialize};
use series_spi::SeasonalComponents;

/// Result of an additive seasonal decomposition, column layout.
///
/// `trend` and `residual` are `None` where the centered moving-average
/// window does not fit: the first and last `period / 2` entries. The
/// seasonal column is defined everywhere and repeats with the period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    /// Centered moving-average trend component.
    pub trend: Vec<Option<f64>>,
    /// Repeating seasonal component.
    pub seasonal: Vec<f64>,
    /// Remainder component, defined where trend is defined.
    pub residual: Vec<Option<f64>>,
    /// Seasonal period length used for the decomposition.
    pub period: usize,
}

impl Decomposition {
    /// Number of periods covered (equals the input series length).
    pub fn len(&self) -> usize {
        self.seasonal.len()
    }

    /// Whether the decomposition covers no periods.
    pub fn is_empty(&self) -> bool {
        self.seasonal.is_empty()
    }

    /// Per-period row view of the three components.
    pub fn components(&self) -> Vec<SeasonalComponents> {
        (0..self.len())
            .map(|i| SeasonalComponents {
                trend: self.trend[i],
                seasonal: self.seasonal[i],
                residual: self.residual[i],
            })
            .collect()
    }
}
