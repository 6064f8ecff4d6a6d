//! Revenue Analytics Facade
//!
//! Unified re-exports for the analytics stack. This facade provides a
//! single entry point to the whole pipeline:
//! - Contracts, errors, and result models from SPI
//! - Configuration types from API
//! - Stage implementations and the composed pipeline from Core
//!
//! # Example
//!
//! ```
//! use analytics_facade::prelude::*;
//! use series_facade::{RevenueRecord, RevenueSeries};
//!
//! let records = (0..6)
//!     .map(|i| RevenueRecord::new(&format!("2024-0{}", i + 1), 100.0 + 10.0 * i as f64))
//!     .collect();
//! let series = RevenueSeries::from_records(records).unwrap();
//!
//! let pipeline = RevenuePipeline::new(PipelineConfig::default()).unwrap();
//! let report = pipeline.run(&series).unwrap();
//! assert_eq!(report.rows.len(), 6);
//! ```

// Re-export everything from SPI
pub use analytics_spi::*;

// Re-export everything from API
pub use analytics_api::*;

// Re-export everything from Core
pub use analytics_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use analytics_api::{
        AnomalyConfig, DecompositionConfig, PipelineConfig, PipelineConfigBuilder,
    };
    pub use analytics_core::{
        decompose_additive, derive_rows, detect_anomalies, growth_pct, suggest_period, summarize,
        AdditiveDecomposer, IsolationForestDetector, RevenuePipeline, TrendLine,
    };
    pub use analytics_spi::{
        AnalysisReport, AnalyticsError, AnomalyDetector, AnomalyResult, Decomposer,
        Decomposition, Result, RevenueSummary, TrendCoefficients, TrendEstimator,
    };
}
