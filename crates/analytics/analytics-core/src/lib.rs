//! Revenue Analytics Core
//!
//! Implementations of the analytics pipeline stages:
//!
//! - [`growth`]: period-over-period percentage change
//! - [`trend`]: ordinary least-squares trend line
//! - [`anomaly`]: isolation-forest outlier detection
//! - [`decomposition`]: additive seasonal decomposition
//! - [`seasonality`]: autocorrelation-based period suggestion
//! - [`summary`]: headline KPIs
//! - [`pipeline`]: the composed end-to-end run

pub mod anomaly;
pub mod decomposition;
pub mod growth;
pub mod pipeline;
pub mod seasonality;
pub mod summary;
pub mod trend;

pub use anomaly::{detect_anomalies, IsolationForestDetector};
pub use decomposition::{decompose_additive, AdditiveDecomposer};
pub use growth::growth_pct;
pub use pipeline::{derive_rows, RevenuePipeline};
pub use seasonality::{autocorrelation, suggest_period};
pub use summary::summarize;
pub use trend::TrendLine;
