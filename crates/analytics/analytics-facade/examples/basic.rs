//! Basic example demonstrating the analytics pipeline
//!
//! Run with: cargo run --example basic -p analytics-facade

use std::io::Cursor;

use analytics_facade::prelude::*;
use series_facade::{read_series, CsvConfig};

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    println!("=== revenue analytics basic example ===\n");

    // Two years of monthly revenue with a quarterly rhythm and one spike.
    let mut csv = String::from("month,revenue\n");
    for i in 0..24 {
        let year = 2023 + i / 12;
        let month = i % 12 + 1;
        let revenue = if i == 20 {
            640.0
        } else {
            180.0 + 2.5 * i as f64 + [12.0, -3.0, -5.0, -4.0][i % 4]
        };
        csv.push_str(&format!("{year}-{month:02},{revenue}\n"));
    }

    let series = read_series(Cursor::new(csv.as_bytes()), &CsvConfig::default())?;

    let pipeline = RevenuePipeline::new(
        PipelineConfigBuilder::new()
            .contamination(0.1)
            .decomposition(4)
            .build(),
    )?;
    let report = pipeline.run(&series)?;

    println!("Summary:");
    println!("   periods        {}", report.summary.periods);
    println!("   total revenue  {:>10.2}", report.summary.total_revenue);
    println!("   mean revenue   {:>10.2}", report.summary.mean_revenue);
    if let Some(growth) = report.summary.latest_growth_pct {
        println!("   latest growth  {growth:>9.2}%");
    }

    println!(
        "\nTrend: slope {:.2}/month, intercept {:.2}, R2 {:.3}",
        report.trend.slope, report.trend.intercept, report.trend.r_squared
    );

    println!("\nDerived table:");
    println!("   period    revenue   growth%   predicted  anomaly");
    for row in &report.rows {
        let growth = row
            .growth_pct
            .map(|g| format!("{g:>8.2}"))
            .unwrap_or_else(|| "       -".to_string());
        println!(
            "   {:>7} {:>9.2} {growth} {:>11.2}  {}",
            row.period,
            row.revenue,
            row.predicted_revenue,
            if row.anomaly { "YES" } else { "" }
        );
    }

    if let Some(decomposition) = &report.decomposition {
        println!("\nSeasonal pattern (period {}):", decomposition.period);
        for (phase, offset) in decomposition.seasonal[..decomposition.period].iter().enumerate() {
            println!("   phase {phase}: {offset:>7.2}");
        }
    }

    if let Some(period) = suggest_period(&series.revenues(), 12) {
        println!("\nStrongest cycle in the data: every {period} months");
    }

    println!("\n=== example complete ===");
    Ok(())
}
