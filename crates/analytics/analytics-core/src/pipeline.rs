//! Composed analytics pipeline.
//!
//! Glues the stages together: summary, growth, trend, anomaly flags, and
//! (when configured) seasonal decomposition. Each stage stays callable on
//! its own; the pipeline only owns its configuration, never intermediate
//! state, so every run recomputes from the input series it is given.

use analytics_api::{AnomalyConfig, PipelineConfig};
use analytics_spi::{AnalysisReport, Result, TrendEstimator};
use series_spi::{DerivedRow, RevenueSeries};

use crate::anomaly::detect_anomalies;
use crate::decomposition::decompose_additive;
use crate::growth::growth_pct;
use crate::summary::summarize;
use crate::trend::TrendLine;

/// Compute the derived-metrics table for a series: growth, trend
/// prediction, and anomaly flag per period. Always returns exactly one row
/// per input period.
pub fn derive_rows(series: &RevenueSeries, config: &AnomalyConfig) -> Result<Vec<DerivedRow>> {
    let revenues = series.revenues();

    let mut trend = TrendLine::new();
    trend.fit(&revenues)?;
    let predicted = trend.fitted_values()?;

    let growth = growth_pct(&revenues);
    let anomalies = detect_anomalies(&revenues, config)?;

    Ok(assemble_rows(series, &growth, &predicted, &anomalies.is_anomaly))
}

fn assemble_rows(
    series: &RevenueSeries,
    growth: &[Option<f64>],
    predicted: &[f64],
    flags: &[bool],
) -> Vec<DerivedRow> {
    series
        .records()
        .iter()
        .enumerate()
        .map(|(i, record)| DerivedRow {
            period: record.period.clone(),
            revenue: record.revenue,
            growth_pct: growth[i],
            predicted_revenue: predicted[i],
            anomaly: flags[i],
        })
        .collect()
}

/// The full pipeline: one validated configuration, reusable across runs.
pub struct RevenuePipeline {
    config: PipelineConfig,
}

impl RevenuePipeline {
    /// Create a pipeline, validating the configuration up front.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run every configured stage over the series.
    ///
    /// A configured decomposition that cannot be computed (series shorter
    /// than two cycles) fails the whole run; the report never carries a
    /// silently missing section.
    pub fn run(&self, series: &RevenueSeries) -> Result<AnalysisReport> {
        let revenues = series.revenues();

        let summary = summarize(series)?;
        let growth = growth_pct(&revenues);

        let mut trend = TrendLine::new();
        trend.fit(&revenues)?;
        let predicted = trend.fitted_values()?;

        let anomalies = detect_anomalies(&revenues, &self.config.anomaly)?;

        let rows = assemble_rows(series, &growth, &predicted, &anomalies.is_anomaly);

        let decomposition = match &self.config.decomposition {
            Some(config) => Some(decompose_additive(&revenues, config.period)?),
            None => None,
        };

        Ok(AnalysisReport {
            summary,
            rows,
            trend: trend.coefficients()?,
            decomposition,
        })
    }
}
