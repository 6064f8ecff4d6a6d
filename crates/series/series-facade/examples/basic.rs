//! Basic example demonstrating series ingestion and export
//!
//! Run with: cargo run --example basic -p series-facade

use std::io::Cursor;

use series_facade::{read_series, write_derived_rows, CsvConfig, DerivedRow};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== series basic example ===\n");

    let input = "month,revenue\n\
                 2024-01,12000\n\
                 2024-02,12600\n\
                 2024-03,11900\n\
                 2024-04,13400\n";

    let series = read_series(Cursor::new(input), &CsvConfig::default())?;
    println!("Loaded {} periods:", series.len());
    for record in series.records() {
        println!("   {:>8}  {:>10.2}", record.period, record.revenue);
    }

    // Write a minimal derived table back out (growth only).
    let revenues = series.revenues();
    let rows: Vec<DerivedRow> = series
        .records()
        .iter()
        .enumerate()
        .map(|(i, r)| DerivedRow {
            period: r.period.clone(),
            revenue: r.revenue,
            growth_pct: (i > 0 && revenues[i - 1] != 0.0)
                .then(|| (r.revenue - revenues[i - 1]) / revenues[i - 1] * 100.0),
            predicted_revenue: r.revenue,
            anomaly: false,
        })
        .collect();

    let mut out = Vec::new();
    write_derived_rows(&mut out, &rows)?;
    println!("\nExported table:\n{}", String::from_utf8(out)?);

    Ok(())
}
