//! Additive seasonal decomposition.
//!
//! Splits a series into `trend + seasonal + residual`. The trend is a
//! centered moving average and is undefined for the first and last
//! `period / 2` entries; those positions carry `None` rather than a padded
//! value so consumers can tell real estimates from edge artifacts.

use analytics_spi::{AnalyticsError, Decomposer, Decomposition, Result};

/// Additive decomposer: `y = trend + seasonal + residual`.
pub struct AdditiveDecomposer;

impl AdditiveDecomposer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AdditiveDecomposer {
    fn default() -> Self {
        Self::new()
    }
}

impl Decomposer for AdditiveDecomposer {
    fn decompose(&self, data: &[f64], period: usize) -> Result<Decomposition> {
        decompose_additive(data, period)
    }
}

/// Perform an additive decomposition with the given seasonal period.
///
/// Requires at least two full cycles of data. Even periods use the
/// half-weight convention at the window boundary, so the window spans
/// `period + 1` points with the two outermost counted at half weight.
pub fn decompose_additive(data: &[f64], period: usize) -> Result<Decomposition> {
    if period < 2 {
        return Err(AnalyticsError::InvalidParameter {
            name: "period".to_string(),
            reason: "must be at least 2".to_string(),
        });
    }
    if data.len() < 2 * period {
        return Err(AnalyticsError::InsufficientData {
            required: 2 * period,
            actual: data.len(),
        });
    }

    let n = data.len();
    let half = period / 2;

    // Centered moving-average trend
    let mut trend: Vec<Option<f64>> = vec![None; n];
    for (i, slot) in trend.iter_mut().enumerate().take(n - half).skip(half) {
        let window_sum = if period % 2 == 0 {
            let mut sum = 0.5 * data[i - half] + 0.5 * data[i + half];
            sum += data[i - half + 1..i + half].iter().sum::<f64>();
            sum
        } else {
            data[i - half..=i + half].iter().sum::<f64>()
        };
        *slot = Some(window_sum / period as f64);
    }

    // Phase averages of the detrended values
    let mut factors = vec![0.0; period];
    for (phase, factor) in factors.iter_mut().enumerate() {
        let detrended: Vec<f64> = (phase..n)
            .step_by(period)
            .filter_map(|i| trend[i].map(|t| data[i] - t))
            .collect();
        // Two full cycles guarantee every phase has a defined window
        *factor = detrended.iter().sum::<f64>() / detrended.len() as f64;
    }

    // Center the seasonal pattern so it sums to zero over one cycle
    let mean_factor: f64 = factors.iter().sum::<f64>() / period as f64;
    for factor in &mut factors {
        *factor -= mean_factor;
    }

    let seasonal: Vec<f64> = (0..n).map(|i| factors[i % period]).collect();

    let residual: Vec<Option<f64>> = (0..n)
        .map(|i| trend[i].map(|t| data[i] - t - seasonal[i]))
        .collect();

    Ok(Decomposition {
        trend,
        seasonal,
        residual,
        period,
    })
}
