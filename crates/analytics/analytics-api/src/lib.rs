//! Revenue Analytics API
//!
//! Configuration types and builders for the analytics pipeline.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use analytics_spi::{AnalyticsError, Result};

// ============================================================================
// Anomaly Detection Configuration
// ============================================================================

/// Isolation-forest anomaly detector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyConfig {
    /// Expected fraction of anomalous periods, in `(0, 0.5]` (default: 0.1).
    pub contamination: f64,
    /// Number of isolation trees in the ensemble (default: 100).
    pub trees: usize,
    /// Subsample size per tree; capped at the series length (default: 256).
    pub sample_size: usize,
    /// RNG seed. Identical input + identical seed = identical flags.
    pub seed: u64,
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            contamination: 0.1,
            trees: 100,
            sample_size: 256,
            seed: 42,
        }
    }
}

impl AnomalyConfig {
    /// Default configuration with an explicit contamination fraction.
    pub fn new(contamination: f64) -> Self {
        Self {
            contamination,
            ..Self::default()
        }
    }

    /// Override the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate the parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.contamination > 0.0 && self.contamination <= 0.5) {
            return Err(AnalyticsError::InvalidParameter {
                name: "contamination".to_string(),
                reason: "must be in (0, 0.5]".to_string(),
            });
        }
        if self.trees == 0 {
            return Err(AnalyticsError::InvalidParameter {
                name: "trees".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.sample_size < 2 {
            return Err(AnalyticsError::InvalidParameter {
                name: "sample_size".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Seasonal Decomposition Configuration
// ============================================================================

/// Additive seasonal decomposition configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecompositionConfig {
    /// Seasonal period length in observations (default: 12, monthly data
    /// with a yearly cycle).
    pub period: usize,
}

impl Default for DecompositionConfig {
    fn default() -> Self {
        Self { period: 12 }
    }
}

impl DecompositionConfig {
    /// Configuration with an explicit period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Validate the parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.period < 2 {
            return Err(AnalyticsError::InvalidParameter {
                name: "period".to_string(),
                reason: "must be at least 2".to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Pipeline Configuration
// ============================================================================

/// Configuration for a full pipeline run.
///
/// Decomposition is opt-in: when a [`DecompositionConfig`] is present the
/// run fails if the series is shorter than two full cycles, rather than
/// silently omitting the section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Anomaly detector settings.
    pub anomaly: AnomalyConfig,
    /// Seasonal decomposition settings, when requested.
    pub decomposition: Option<DecompositionConfig>,
}

impl PipelineConfig {
    /// Validate all nested configurations.
    pub fn validate(&self) -> Result<()> {
        self.anomaly.validate()?;
        if let Some(decomposition) = &self.decomposition {
            decomposition.validate()?;
        }
        Ok(())
    }
}

/// Builder for [`PipelineConfig`].
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    anomaly: Option<AnomalyConfig>,
    decomposition: Option<DecompositionConfig>,
}

impl PipelineConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the anomaly detector settings.
    pub fn anomaly(mut self, config: AnomalyConfig) -> Self {
        self.anomaly = Some(config);
        self
    }

    /// Set the contamination fraction, keeping the other anomaly defaults.
    pub fn contamination(mut self, contamination: f64) -> Self {
        self.anomaly = Some(AnomalyConfig::new(contamination));
        self
    }

    /// Request a seasonal decomposition with the given period.
    pub fn decomposition(mut self, period: usize) -> Self {
        self.decomposition = Some(DecompositionConfig::new(period));
        self
    }

    /// Build the configuration, falling back to defaults for unset fields.
    pub fn build(self) -> PipelineConfig {
        PipelineConfig {
            anomaly: self.anomaly.unwrap_or_default(),
            decomposition: self.decomposition,
        }
    }
}
