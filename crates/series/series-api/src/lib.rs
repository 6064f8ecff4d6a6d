//! Revenue Series API
//!
//! Configuration types and builders for series ingestion.

use serde::{Deserialize, Serialize};

/// Configuration for reading a revenue series from a delimited file.
///
/// The input must be UTF-8 with a header row. The period and revenue column
/// names are matched exactly against the header; any other columns are
/// ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Header name of the period-label column (default: "month").
    pub period_column: String,
    /// Header name of the revenue column (default: "revenue").
    pub revenue_column: String,
    /// Field delimiter (default: `,`).
    pub delimiter: u8,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            period_column: "month".to_string(),
            revenue_column: "revenue".to_string(),
            delimiter: b',',
        }
    }
}

impl CsvConfig {
    /// Create a configuration with explicit column names.
    pub fn new(period_column: &str, revenue_column: &str) -> Self {
        Self {
            period_column: period_column.to_string(),
            revenue_column: revenue_column.to_string(),
            delimiter: b',',
        }
    }
}

/// Builder for [`CsvConfig`].
#[derive(Debug, Default)]
pub struct CsvConfigBuilder {
    period_column: Option<String>,
    revenue_column: Option<String>,
    delimiter: Option<u8>,
}

impl CsvConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the period-label column name.
    pub fn period_column(mut self, name: &str) -> Self {
        self.period_column = Some(name.to_string());
        self
    }

    /// Set the revenue column name.
    pub fn revenue_column(mut self, name: &str) -> Self {
        self.revenue_column = Some(name.to_string());
        self
    }

    /// Set the field delimiter.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Build the configuration, falling back to defaults for unset fields.
    pub fn build(self) -> CsvConfig {
        let defaults = CsvConfig::default();
        CsvConfig {
            period_column: self.period_column.unwrap_or(defaults.period_column),
            revenue_column: self.revenue_column.unwrap_or(defaults.revenue_column),
            delimiter: self.delimiter.unwrap_or(defaults.delimiter),
        }
    }
}
