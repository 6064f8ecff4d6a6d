//! Series source trait definition.

use crate::error::Result;
use crate::model::RevenueSeries;

/// Trait for providers that can load a revenue series.
///
/// Implementations read from some backing store (a CSV file, a fixture, an
/// upstream system) and return a fully validated series.
pub trait SeriesSource: Send + Sync {
    /// Source name, for diagnostics.
    fn name(&self) -> &str;

    /// Load and validate the series.
    fn load(&self) -> Result<RevenueSeries>;
}
