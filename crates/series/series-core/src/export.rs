//! CSV writer for the derived-metrics table.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use series_spi::{DerivedRow, Result, SeriesError};

/// Serialize derived rows as CSV to any writer.
///
/// The header row is derived from the [`DerivedRow`] field names. An
/// undefined growth value is written as an empty field.
pub fn write_derived_rows<W: Write>(writer: W, rows: &[DerivedRow]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)
            .map_err(|e| SeriesError::WriteFailed(e.to_string()))?;
    }
    wtr.flush()
        .map_err(|e| SeriesError::WriteFailed(e.to_string()))?;
    Ok(())
}

/// Serialize derived rows as CSV to a file path.
pub fn export_derived_rows<P: AsRef<Path>>(path: P, rows: &[DerivedRow]) -> Result<()> {
    let file = File::create(path.as_ref())
        .map_err(|e| SeriesError::WriteFailed(format!("{}: {e}", path.as_ref().display())))?;
    write_derived_rows(file, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rows() -> Vec<DerivedRow> {
        vec![
            DerivedRow {
                period: "2024-01".to_string(),
                revenue: 100.0,
                growth_pct: None,
                predicted_revenue: 101.0,
                anomaly: false,
            },
            DerivedRow {
                period: "2024-02".to_string(),
                revenue: 110.0,
                growth_pct: Some(10.0),
                predicted_revenue: 109.0,
                anomaly: true,
            },
        ]
    }

    #[test]
    fn test_write_derived_rows_header_and_rows() {
        let mut buf = Vec::new();
        write_derived_rows(&mut buf, &sample_rows()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "period,revenue,growth_pct,predicted_revenue,anomaly"
        );
        assert_eq!(lines[1], "2024-01,100.0,,101.0,false");
        assert_eq!(lines[2], "2024-02,110.0,10.0,109.0,true");
    }

    #[test]
    fn test_write_empty_table_is_valid() {
        let mut buf = Vec::new();
        write_derived_rows(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_export_to_unwritable_path() {
        let result = export_derived_rows("/definitely/not/here/out.csv", &sample_rows());
        assert!(matches!(
            result.unwrap_err(),
            SeriesError::WriteFailed(_)
        ));
    }
}
