//! Validated revenue series.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SeriesError};
use crate::model::RevenueRecord;

/// An ordered, validated sequence of revenue records.
///
/// Periods are assumed contiguous and evenly spaced. Construction enforces:
/// non-empty input, non-empty period labels, unique labels, finite revenue
/// values, and — when every label is an ISO `YYYY-MM` month — strictly
/// increasing chronological order. Opaque labels (e.g. localized month names)
/// keep their input order, since no total order can be derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevenueSeries {
    records: Vec<RevenueRecord>,
}

impl RevenueSeries {
    /// Build a series from records, validating the invariants above.
    pub fn from_records(records: Vec<RevenueRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(SeriesError::Empty);
        }

        for (i, record) in records.iter().enumerate() {
            if record.period.trim().is_empty() {
                return Err(SeriesError::EmptyPeriodLabel(i + 1));
            }
            if !record.revenue.is_finite() {
                return Err(SeriesError::NonFiniteRevenue {
                    period: record.period.clone(),
                });
            }
        }

        for (i, record) in records.iter().enumerate() {
            if records[..i].iter().any(|r| r.period == record.period) {
                return Err(SeriesError::DuplicatePeriod(record.period.clone()));
            }
        }

        // Chronological check only when every label is an ISO month
        let months: Option<Vec<(i32, u32)>> =
            records.iter().map(|r| parse_iso_month(&r.period)).collect();
        if let Some(months) = months {
            for (i, pair) in months.windows(2).enumerate() {
                if pair[1] <= pair[0] {
                    return Err(SeriesError::OutOfOrder {
                        prev: records[i].period.clone(),
                        next: records[i + 1].period.clone(),
                    });
                }
            }
        }

        Ok(Self { records })
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series is empty. Always `false` for a constructed series,
    /// kept for the conventional `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in period order.
    pub fn records(&self) -> &[RevenueRecord] {
        &self.records
    }

    /// Record at a given index.
    pub fn get(&self, index: usize) -> Option<&RevenueRecord> {
        self.records.get(index)
    }

    /// Period labels, in order.
    pub fn labels(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.period.as_str()).collect()
    }

    /// Revenue values, in order.
    pub fn revenues(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.revenue).collect()
    }
}

/// Parse an ISO `YYYY-MM` label into `(year, month)`.
fn parse_iso_month(label: &str) -> Option<(i32, u32)> {
    let (year, month) = label.split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if (1..=12).contains(&month) {
        Some((year, month))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(period: &str, revenue: f64) -> RevenueRecord {
        RevenueRecord::new(period, revenue)
    }

    #[test]
    fn test_from_records_valid() {
        let series = RevenueSeries::from_records(vec![
            record("2024-01", 100.0),
            record("2024-02", 110.0),
            record("2024-03", 121.0),
        ])
        .unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.labels(), vec!["2024-01", "2024-02", "2024-03"]);
        assert_eq!(series.revenues(), vec![100.0, 110.0, 121.0]);
    }

    #[test]
    fn test_from_records_empty() {
        let result = RevenueSeries::from_records(vec![]);
        assert!(matches!(result.unwrap_err(), SeriesError::Empty));
    }

    #[test]
    fn test_from_records_duplicate_period() {
        let result = RevenueSeries::from_records(vec![
            record("Jan", 100.0),
            record("Feb", 110.0),
            record("Jan", 121.0),
        ]);
        match result.unwrap_err() {
            SeriesError::DuplicatePeriod(label) => assert_eq!(label, "Jan"),
            other => panic!("Expected DuplicatePeriod, got {other:?}"),
        }
    }

    #[test]
    fn test_from_records_empty_label() {
        let result =
            RevenueSeries::from_records(vec![record("Jan", 100.0), record("  ", 110.0)]);
        match result.unwrap_err() {
            SeriesError::EmptyPeriodLabel(row) => assert_eq!(row, 2),
            other => panic!("Expected EmptyPeriodLabel, got {other:?}"),
        }
    }

    #[test]
    fn test_from_records_non_finite_revenue() {
        let result =
            RevenueSeries::from_records(vec![record("Jan", 100.0), record("Feb", f64::NAN)]);
        match result.unwrap_err() {
            SeriesError::NonFiniteRevenue { period } => assert_eq!(period, "Feb"),
            other => panic!("Expected NonFiniteRevenue, got {other:?}"),
        }
    }

    #[test]
    fn test_from_records_out_of_order_iso_months() {
        let result = RevenueSeries::from_records(vec![
            record("2024-01", 100.0),
            record("2024-03", 110.0),
            record("2024-02", 121.0),
        ]);
        match result.unwrap_err() {
            SeriesError::OutOfOrder { prev, next } => {
                assert_eq!(prev, "2024-03");
                assert_eq!(next, "2024-02");
            }
            other => panic!("Expected OutOfOrder, got {other:?}"),
        }
    }

    #[test]
    fn test_from_records_iso_months_across_year_boundary() {
        let series = RevenueSeries::from_records(vec![
            record("2023-11", 90.0),
            record("2023-12", 95.0),
            record("2024-01", 100.0),
        ])
        .unwrap();
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_from_records_opaque_labels_keep_input_order() {
        // Localized month names carry no derivable order; file order wins.
        let series = RevenueSeries::from_records(vec![
            record("Janvier", 100.0),
            record("Fevrier", 110.0),
            record("Mars", 121.0),
        ])
        .unwrap();
        assert_eq!(series.labels()[0], "Janvier");
    }

    #[test]
    fn test_single_record_series() {
        let series = RevenueSeries::from_records(vec![record("2024-01", 42.0)]).unwrap();
        assert_eq!(series.len(), 1);
        assert!(!series.is_empty());
        assert_eq!(series.get(0).unwrap().revenue, 42.0);
        assert!(series.get(1).is_none());
    }
}
