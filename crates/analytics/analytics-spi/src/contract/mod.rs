//! Contracts for analytics implementations.

mod anomaly_detector;
mod decomposer;
mod trend_estimator;

pub use anomaly_detector::AnomalyDetector;
pub use decomposer::Decomposer;
pub use trend_estimator::TrendEstimator;
