//! Trend estimator trait definition.

use crate::error::Result;
use crate::model::TrendCoefficients;

/// Common trait for trend models over an evenly spaced series.
///
/// Follows the fit-then-query pattern: `fit` learns the model from the
/// observed values (indexed `0..n`), after which predictions can be read at
/// any time index, observed or future.
pub trait TrendEstimator {
    /// Fit the model to the observed values.
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Predict the value at a (possibly fractional) time index.
    fn predict_at(&self, t: f64) -> Result<f64>;

    /// Fitted coefficients of the trend.
    fn coefficients(&self) -> Result<TrendCoefficients>;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool;
}
