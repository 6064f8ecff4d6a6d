//! Fitted trend coefficients.

use serde::{Deserialize, Serialize};

/// Coefficients of a fitted straight-line trend
/// `y = intercept + slope * t`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendCoefficients {
    /// Revenue change per period.
    pub slope: f64,
    /// Fitted value at period index 0.
    pub intercept: f64,
    /// Coefficient of determination of the fit.
    pub r_squared: f64,
}

impl TrendCoefficients {
    /// Evaluate the fitted line at a time index.
    pub fn value_at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_at() {
        let coefficients = TrendCoefficients {
            slope: 2.0,
            intercept: 10.0,
            r_squared: 1.0,
        };
        assert!((coefficients.value_at(0.0) - 10.0).abs() < 1e-10);
        assert!((coefficients.value_at(5.0) - 20.0).abs() < 1e-10);
    }
}
