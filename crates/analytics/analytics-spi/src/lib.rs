//! Revenue Analytics Service Provider Interface
//!
//! Defines traits and types for the revenue analytics pipeline: trend
//! estimation, anomaly detection, and seasonal decomposition.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{AnomalyDetector, Decomposer, TrendEstimator};
pub use error::{AnalyticsError, Result};
pub use model::{
    AnalysisReport, AnomalyResult, Decomposition, RevenueSummary, TrendCoefficients,
};
