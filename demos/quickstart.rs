//! Quickstart example demonstrating basic usage of trendcast.
//!
//! Run with: cargo run --example quickstart
//! Set RUST_LOG=trendcast=debug to see per-stage logging.

use trendcast::factors::{load_factor_records, RawFactor};
use trendcast::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== trendcast Quickstart ===\n");

    // 1. Build monthly rows the way a source sheet provides them
    let mut builder = Dataset::builder().first_column(2).labels(["North", "South"]);
    for i in 0..36u32 {
        let year = 2021 + (i / 12) as i32;
        let month = i % 12 + 1;
        let season = (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin();
        let north = 120.0 + 1.5 * i as f64 + 20.0 * season;
        // South has a reporting gap every August
        let south = if month == 8 { None } else { Some(80.0 - 0.5 * i as f64 + 8.0 * season) };
        builder = builder.row(SourceRow::new(Some(year), Some(month), vec![Some(north), south]));
    }
    let dataset = builder.build()?;
    println!(
        "Loaded {} series over {} periods",
        dataset.series_count(),
        dataset.period_count()
    );

    // 2. Resolve factor kinds from their textual labels
    let raw = vec![
        RawFactor {
            description: "Marketing".into(),
            kind: "coefficient".into(),
            header: "north".into(),
            values: vec![Some(1.05); 12],
        },
        RawFactor {
            description: "New outlets".into(),
            kind: "units".into(),
            header: "SOUTH".into(),
            values: (0..12).map(|m| if m < 6 { None } else { Some(10.0) }).collect(),
        },
    ];
    let factors = load_factor_records(raw);
    println!("Resolved {} factor records", factors.len());

    // 3. Run the pipeline
    let config = PipelineConfig::default().with_half_width(2);
    let output = Pipeline::new(config)?.run(&dataset, &factors)?;
    println!("Forecasting year {}", output.anchor_year);

    // 4. Report per series
    for series in &output.series {
        let (intercept, slope) = series.trend_coefficients();
        println!("\n--- {} ---", series.label);
        println!("Trend: {:.2} + {:.2} * t", intercept, slope);
        println!("Applied factors: {}", series.factors.len());
        println!(
            "{:>8} {:>8} {:>10} {:>12} {:>10}",
            "Period", "Index", "Trend", "Seasonal", "Final"
        );
        println!("{:-<52}", "");
        for (m, period) in output.forecast_periods.iter().enumerate() {
            println!(
                "{:>8} {:>8.4} {:>10.2} {:>12.2} {:>10.2}",
                period.to_string(),
                series.indices.values()[m],
                series.trend.forecast[m],
                series.reseasonalized[m],
                series.final_forecast[m]
            );
        }
    }

    println!("\n=== Quickstart Complete ===");
    Ok(())
}
