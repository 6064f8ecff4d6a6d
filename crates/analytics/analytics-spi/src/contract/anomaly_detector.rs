//! Anomaly detector trait definition.

use crate::error::Result;
use crate::model::AnomalyResult;

/// Anomaly detector trait.
///
/// Implementations score points of a series without supervision and flag
/// the most unusual ones.
pub trait AnomalyDetector: Send + Sync {
    /// Fit the detector to the series.
    fn fit(&mut self, data: &[f64]) -> Result<()>;

    /// Detect anomalies in data.
    fn detect(&self, data: &[f64]) -> Result<AnomalyResult>;

    /// Compute anomaly scores without thresholding.
    fn score(&self, data: &[f64]) -> Result<Vec<f64>>;

    /// Check if the detector has been fitted.
    fn is_fitted(&self) -> bool;
}
