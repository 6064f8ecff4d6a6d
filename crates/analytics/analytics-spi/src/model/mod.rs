//! Result models for analytics computations.

mod anomaly_result;
mod decomposition;
mod report;
mod summary;
mod trend_fit;

pub use anomaly_result::AnomalyResult;
pub use decomposition::Decomposition;
pub use report::AnalysisReport;
pub use summary::RevenueSummary;
pub use trend_fit::TrendCoefficients;
