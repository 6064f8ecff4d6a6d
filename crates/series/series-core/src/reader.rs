//! CSV reader for revenue series.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use series_api::CsvConfig;
use series_spi::{Result, RevenueRecord, RevenueSeries, SeriesError, SeriesSource};

/// Read a revenue series from any CSV reader.
///
/// The header row is required. The configured period and revenue columns are
/// located by exact header match; all other columns are ignored. Row numbers
/// in errors are 1-based and include the header row.
pub fn read_series<R: Read>(reader: R, config: &CsvConfig) -> Result<RevenueSeries> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(config.delimiter)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| SeriesError::ReadFailed(e.to_string()))?;

    let period_idx = column_index(headers, &config.period_column)?;
    let revenue_idx = column_index(headers, &config.revenue_column)?;

    let mut records = Vec::new();
    for (i, row) in rdr.records().enumerate() {
        // +2: 1-based, after the header row
        let row_number = i + 2;
        let row = row.map_err(|e| SeriesError::ReadFailed(e.to_string()))?;

        let period = field(&row, period_idx, row_number)?;
        let raw_revenue = field(&row, revenue_idx, row_number)?;
        let revenue: f64 = raw_revenue
            .parse()
            .map_err(|_| SeriesError::InvalidRevenue {
                row: row_number,
                value: raw_revenue.to_string(),
            })?;

        records.push(RevenueRecord::new(period, revenue));
    }

    RevenueSeries::from_records(records)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| SeriesError::MissingColumn(name.to_string()))
}

fn field<'r>(row: &'r csv::StringRecord, index: usize, row_number: usize) -> Result<&'r str> {
    row.get(index)
        .ok_or_else(|| SeriesError::ReadFailed(format!("row {row_number}: too few fields")))
}

/// A [`SeriesSource`] backed by a CSV file on disk.
pub struct CsvSeriesSource {
    path: PathBuf,
    config: CsvConfig,
}

impl CsvSeriesSource {
    /// Source over `path` with default column names.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self::with_config(path, CsvConfig::default())
    }

    /// Source over `path` with explicit column configuration.
    pub fn with_config<P: AsRef<Path>>(path: P, config: CsvConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            config,
        }
    }
}

impl SeriesSource for CsvSeriesSource {
    fn name(&self) -> &str {
        "csv"
    }

    fn load(&self) -> Result<RevenueSeries> {
        let file = File::open(&self.path).map_err(|e| {
            SeriesError::ReadFailed(format!("{}: {e}", self.path.display()))
        })?;
        read_series(file, &self.config)
    }
}
