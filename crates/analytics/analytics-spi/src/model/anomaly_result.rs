//! Anomaly detection result types.

use serde::{Deserialize, Serialize};

/// Anomaly detection result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalyResult {
    /// Boolean mask indicating anomalies, one entry per input point.
    pub is_anomaly: Vec<bool>,
    /// Anomaly scores for each point (higher = more unusual).
    pub scores: Vec<f64>,
    /// Score threshold that separated flagged points.
    pub threshold: f64,
}

impl AnomalyResult {
    /// Create a new anomaly result.
    pub fn new(is_anomaly: Vec<bool>, scores: Vec<f64>, threshold: f64) -> Self {
        Self {
            is_anomaly,
            scores,
            threshold,
        }
    }

    /// Indices of flagged points.
    pub fn anomaly_indices(&self) -> Vec<usize> {
        self.is_anomaly
            .iter()
            .enumerate()
            .filter_map(|(i, &flag)| flag.then_some(i))
            .collect()
    }

    /// Number of flagged points.
    pub fn anomaly_count(&self) -> usize {
        self.is_anomaly.iter().filter(|&&flag| flag).count()
    }

    /// Fraction of points flagged, in `[0, 1]`.
    pub fn flagged_fraction(&self) -> f64 {
        if self.is_anomaly.is_empty() {
            0.0
        } else {
            self.anomaly_count() as f64 / self.is_anomaly.len() as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anomaly_indices_and_count() {
        let result = AnomalyResult::new(
            vec![false, true, false, true],
            vec![0.1, 0.9, 0.2, 0.8],
            0.7,
        );
        assert_eq!(result.anomaly_indices(), vec![1, 3]);
        assert_eq!(result.anomaly_count(), 2);
        assert!((result.flagged_fraction() - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_empty_result() {
        let result = AnomalyResult::new(vec![], vec![], 0.0);
        assert!(result.anomaly_indices().is_empty());
        assert_eq!(result.flagged_fraction(), 0.0);
    }
}
