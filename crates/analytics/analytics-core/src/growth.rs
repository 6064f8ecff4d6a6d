//! Period-over-period growth.

/// Percentage change of each value against its predecessor.
///
/// The output has the same length as the input. Index 0 is `None` (no prior
/// period). An entry is also `None` when the prior value is exactly zero:
/// growth against a zero base is undefined, not an error.
pub fn growth_pct(revenue: &[f64]) -> Vec<Option<f64>> {
    revenue
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            if i == 0 {
                return None;
            }
            let prev = revenue[i - 1];
            if prev == 0.0 {
                None
            } else {
                Some((value - prev) / prev * 100.0)
            }
        })
        .collect()
}
