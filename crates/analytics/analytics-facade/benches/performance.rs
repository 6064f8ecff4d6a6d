//! Performance benchmarks for the analytics pipeline

use std::time::Instant;

use analytics_facade::prelude::*;

fn generate_data(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let t = i as f64;
            100.0 + t * 0.5 + 10.0 * (t * 0.1).sin() + ((i * 13) % 17) as f64
        })
        .collect()
}

fn bench<F>(name: &str, iterations: u32, mut f: F)
where
    F: FnMut(),
{
    // Warmup
    for _ in 0..3 {
        f();
    }

    let start = Instant::now();
    for _ in 0..iterations {
        f();
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations;

    println!(
        "{:30} {:>10.2?} total, {:>10.2?}/iter ({} iters)",
        name, elapsed, per_iter, iterations
    );
}

fn main() {
    println!("=== revenue analytics benchmarks ===\n");

    let data_1k = generate_data(1_000);
    let data_10k = generate_data(10_000);

    println!("--- Stages (10K points) ---");
    bench("growth_pct", 1000, || {
        let _ = growth_pct(&data_10k);
    });
    bench("trend fit", 1000, || {
        let mut trend = TrendLine::new();
        let _ = trend.fit(&data_10k);
    });
    bench("decompose (period 12)", 100, || {
        let _ = decompose_additive(&data_10k, 12);
    });
    bench("suggest_period", 100, || {
        let _ = suggest_period(&data_10k, 24);
    });

    println!("\n--- Anomaly detection ---");
    bench("isolation forest (1K)", 20, || {
        let _ = detect_anomalies(&data_1k, &AnomalyConfig::default());
    });
    bench("isolation forest (10K)", 5, || {
        let _ = detect_anomalies(&data_10k, &AnomalyConfig::default());
    });
}
