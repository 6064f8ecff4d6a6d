//! Seasonal period suggestion.
//!
//! For callers that do not know the cycle length of their data a priori:
//! picks the lag with the strongest autocorrelation, if any lag is
//! convincing enough to act on.

const ACF_THRESHOLD: f64 = 0.3;

/// Autocorrelation of the series for lags `0..=max_lag`.
pub fn autocorrelation(data: &[f64], max_lag: usize) -> Vec<f64> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }
    let mean = data.iter().sum::<f64>() / n as f64;
    let variance: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();

    if variance == 0.0 {
        return vec![1.0; max_lag.min(n - 1) + 1];
    }

    (0..=max_lag.min(n - 1))
        .map(|lag| {
            if lag == 0 {
                1.0
            } else {
                data.iter()
                    .take(n - lag)
                    .zip(data.iter().skip(lag))
                    .map(|(a, b)| (a - mean) * (b - mean))
                    .sum::<f64>()
                    / variance
            }
        })
        .collect()
}

/// Suggest a seasonal period for [`decompose_additive`], or `None` when no
/// lag up to `max_period` correlates strongly enough.
///
/// Only lags that could be decomposed are considered: the series must cover
/// at least two full cycles of the candidate.
///
/// [`decompose_additive`]: crate::decomposition::decompose_additive
pub fn suggest_period(data: &[f64], max_period: usize) -> Option<usize> {
    if data.len() < 4 {
        return None;
    }

    let longest = max_period.min(data.len() / 2);
    let acf = autocorrelation(data, longest);

    let mut best: Option<(usize, f64)> = None;
    for (lag, &value) in acf.iter().enumerate().skip(2) {
        if value > ACF_THRESHOLD && best.map_or(true, |(_, b)| value > b) {
            best = Some((lag, value));
        }
    }
    best.map(|(lag, _)| lag)
}
