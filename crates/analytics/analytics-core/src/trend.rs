//! Ordinary least-squares trend line.

use analytics_spi::{AnalyticsError, Result, TrendCoefficients, TrendEstimator};
use serde::{Deserialize, Serialize};

/// Straight-line trend fitted by ordinary least squares.
///
/// Fits `y = intercept + slope * t` against time indices `t = 0..n`, using
/// the closed form `slope = cov(t, y) / var(t)`,
/// `intercept = mean(y) - slope * mean(t)`. Fitting is deterministic: the
/// same input always produces the same coefficients.
///
/// # Example
///
/// ```
/// use analytics_core::TrendLine;
/// use analytics_spi::TrendEstimator;
///
/// let mut trend = TrendLine::new();
/// trend.fit(&[10.0, 12.0, 14.0, 16.0]).unwrap();
/// assert!((trend.slope() - 2.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendLine {
    slope: f64,
    intercept: f64,
    r_squared: f64,
    n_observations: usize,
    fitted: bool,
}

impl TrendLine {
    /// Create an unfitted trend line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Revenue change per period.
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Fitted value at period index 0.
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Coefficient of determination of the fit.
    pub fn r_squared(&self) -> f64 {
        self.r_squared
    }

    /// Fitted values for the observed indices `0..n`.
    pub fn fitted_values(&self) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AnalyticsError::NotFitted);
        }
        Ok((0..self.n_observations)
            .map(|i| self.intercept + self.slope * i as f64)
            .collect())
    }

    /// Difference between observed values and the fitted line.
    pub fn residuals(&self, data: &[f64]) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AnalyticsError::NotFitted);
        }
        Ok(data
            .iter()
            .enumerate()
            .map(|(i, &y)| y - (self.intercept + self.slope * i as f64))
            .collect())
    }

    /// Extend the fitted line `steps` periods past the observed series.
    pub fn forecast(&self, steps: usize) -> Result<Vec<f64>> {
        if !self.fitted {
            return Err(AnalyticsError::NotFitted);
        }
        Ok((0..steps)
            .map(|i| {
                let t = (self.n_observations + i) as f64;
                self.intercept + self.slope * t
            })
            .collect())
    }
}

impl TrendEstimator for TrendLine {
    fn fit(&mut self, data: &[f64]) -> Result<()> {
        if data.len() < 2 {
            return Err(AnalyticsError::InsufficientData {
                required: 2,
                actual: data.len(),
            });
        }

        let n = data.len() as f64;
        let mean_t = (data.len() - 1) as f64 / 2.0;
        let mean_y = data.iter().sum::<f64>() / n;

        let mut cov_ty = 0.0;
        let mut var_t = 0.0;
        for (i, &y) in data.iter().enumerate() {
            let dt = i as f64 - mean_t;
            cov_ty += dt * (y - mean_y);
            var_t += dt * dt;
        }

        if var_t < 1e-10 {
            return Err(AnalyticsError::NumericalError(
                "zero variance in time index".to_string(),
            ));
        }

        self.slope = cov_ty / var_t;
        self.intercept = mean_y - self.slope * mean_t;
        self.n_observations = data.len();

        let ss_tot: f64 = data.iter().map(|&y| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = data
            .iter()
            .enumerate()
            .map(|(i, &y)| {
                let predicted = self.intercept + self.slope * i as f64;
                (y - predicted).powi(2)
            })
            .sum();
        self.r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            // Constant series: the flat line is an exact fit.
            1.0
        };

        self.fitted = true;
        Ok(())
    }

    fn predict_at(&self, t: f64) -> Result<f64> {
        if !self.fitted {
            return Err(AnalyticsError::NotFitted);
        }
        Ok(self.intercept + self.slope * t)
    }

    fn coefficients(&self) -> Result<TrendCoefficients> {
        if !self.fitted {
            return Err(AnalyticsError::NotFitted);
        }
        Ok(TrendCoefficients {
            slope: self.slope,
            intercept: self.intercept,
            r_squared: self.r_squared,
        })
    }

    fn is_fitted(&self) -> bool {
        self.fitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line_recovered() {
        let data: Vec<f64> = (0..10).map(|i| 10.0 + 2.0 * i as f64).collect();
        let mut trend = TrendLine::new();
        trend.fit(&data).unwrap();

        assert!((trend.slope() - 2.0).abs() < 1e-10);
        assert!((trend.intercept() - 10.0).abs() < 1e-10);
        assert!(trend.r_squared() > 0.999);
    }

    #[test]
    fn test_residuals_sum_to_zero() {
        let data = vec![100.0, 110.0, 121.0, 108.0, 133.0];
        let mut trend = TrendLine::new();
        trend.fit(&data).unwrap();

        let residual_sum: f64 = trend.residuals(&data).unwrap().iter().sum();
        assert!(residual_sum.abs() < 1e-9);
    }

    #[test]
    fn test_constant_series_predicts_constant() {
        let data = vec![7.0; 12];
        let mut trend = TrendLine::new();
        trend.fit(&data).unwrap();

        assert!(trend.slope().abs() < 1e-10);
        for t in [0.0, 3.0, 11.0, 20.0] {
            assert!((trend.predict_at(t).unwrap() - 7.0).abs() < 1e-10);
        }
        assert!((trend.r_squared() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_fitted_values_length() {
        let data = vec![1.0, 4.0, 2.0, 8.0];
        let mut trend = TrendLine::new();
        trend.fit(&data).unwrap();
        assert_eq!(trend.fitted_values().unwrap().len(), data.len());
    }

    #[test]
    fn test_forecast_continues_line() {
        let data: Vec<f64> = (0..6).map(|i| 5.0 + 3.0 * i as f64).collect();
        let mut trend = TrendLine::new();
        trend.fit(&data).unwrap();

        let forecast = trend.forecast(2).unwrap();
        assert!((forecast[0] - 23.0).abs() < 1e-10);
        assert!((forecast[1] - 26.0).abs() < 1e-10);
    }

    #[test]
    fn test_insufficient_data() {
        let mut trend = TrendLine::new();
        for data in [vec![], vec![5.0]] {
            match trend.fit(&data).unwrap_err() {
                AnalyticsError::InsufficientData { required, actual } => {
                    assert_eq!(required, 2);
                    assert_eq!(actual, data.len());
                }
                other => panic!("Expected InsufficientData, got {other:?}"),
            }
            assert!(!trend.is_fitted());
        }
    }

    #[test]
    fn test_unfitted_queries_fail() {
        let trend = TrendLine::new();
        assert_eq!(trend.predict_at(0.0).unwrap_err(), AnalyticsError::NotFitted);
        assert_eq!(trend.fitted_values().unwrap_err(), AnalyticsError::NotFitted);
        assert_eq!(trend.forecast(3).unwrap_err(), AnalyticsError::NotFitted);
        assert_eq!(trend.coefficients().unwrap_err(), AnalyticsError::NotFitted);
    }

    #[test]
    fn test_refit_replaces_coefficients() {
        let mut trend = TrendLine::new();
        trend.fit(&[0.0, 1.0, 2.0]).unwrap();
        assert!((trend.slope() - 1.0).abs() < 1e-10);

        trend.fit(&[0.0, 2.0, 4.0]).unwrap();
        assert!((trend.slope() - 2.0).abs() < 1e-10);
    }
}
