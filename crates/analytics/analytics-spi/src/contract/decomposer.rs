//! Seasonal decomposer trait definition.

use crate::error::Result;
use crate::model::Decomposition;

/// Trait for seasonal decomposition of an evenly spaced series.
///
/// A series shorter than two full cycles cannot be decomposed; the
/// implementation must fail rather than return partial components.
pub trait Decomposer {
    /// Decompose `data` using the given seasonal period length.
    fn decompose(&self, data: &[f64], period: usize) -> Result<Decomposition>;
}
