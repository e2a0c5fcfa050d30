//! End-to-end tests of the forecasting pipeline.

use approx::assert_relative_eq;
use trendcast::prelude::*;
use trendcast::models::RegressionAxis;

fn monthly_dataset(labels: &[&str], columns: Vec<Vec<Observation>>) -> Dataset {
    let n = columns.first().map(Vec::len).unwrap_or(0);
    let index = TimeIndex::monthly(2022, 1, n).unwrap();
    let series = labels
        .iter()
        .zip(columns)
        .enumerate()
        .map(|(i, (label, values))| Series::new(i, *label, values))
        .collect();
    Dataset::new(index, series).unwrap()
}

#[test]
fn multiplicative_then_additive_factor_on_flat_base() {
    let data = monthly_dataset(&["North"], vec![vec![Some(100.0); 24]]);
    let factors = vec![
        FactorRecord::new("north", FactorKind::Multiplicative, vec![Some(1.10); 12]),
        FactorRecord::new(" NORTH ", FactorKind::Additive, vec![Some(5.0); 12]),
    ];
    let output = Pipeline::new(PipelineConfig::default())
        .unwrap()
        .run(&data, &factors)
        .unwrap();

    let north = output.get("North").unwrap();
    assert_relative_eq!(north.trend.slope, 0.0, epsilon = 1e-12);
    assert_relative_eq!(north.trend.intercept, 100.0, epsilon = 1e-9);
    for month in 1..=12 {
        assert_relative_eq!(north.reseasonalized[month - 1], 100.0);
        assert_relative_eq!(north.final_for_month(month as u32).unwrap(), 115.0);
    }
}

#[test]
fn all_gap_month_is_gap_and_neutral() {
    let values: Vec<Observation> = (0..36)
        .map(|i| if i % 12 == 2 { None } else { Some(50.0 + (i % 12) as f64) })
        .collect();
    let data = monthly_dataset(&["North"], vec![values]);
    let output = Pipeline::new(PipelineConfig::default())
        .unwrap()
        .run(&data, &[])
        .unwrap();

    let north = &output.series[0];
    for i in (2..36).step_by(12) {
        assert_eq!(north.smoothed[i], None);
        assert_eq!(north.deseasonalized[i], None);
    }
    assert_relative_eq!(north.indices.unnormalized(3).unwrap(), 1.0);
    assert_relative_eq!(north.indices.sum(), 12.0, epsilon = 1e-3);
}

#[test]
fn series_are_independent() {
    let a: Vec<Observation> = (0..30).map(|i| Some(10.0 + i as f64)).collect();
    let b: Vec<Observation> = (0..30).map(|i| Some(500.0 - 3.0 * i as f64)).collect();

    let pipeline = Pipeline::new(PipelineConfig::default()).unwrap();
    let together = pipeline
        .run(&monthly_dataset(&["A", "B"], vec![a.clone(), b]), &[])
        .unwrap();
    let alone = pipeline.run(&monthly_dataset(&["A"], vec![a]), &[]).unwrap();

    assert_eq!(together.series[0], alone.series[0]);
}

#[test]
fn rows_without_period_are_skipped_before_forecasting() {
    let mut builder = Dataset::builder().first_column(7).labels(["North"]);
    for i in 0..24u32 {
        builder = builder.row(SourceRow::new(
            Some(2022 + (i / 12) as i32),
            Some(i % 12 + 1),
            vec![Some(100.0 + i as f64)],
        ));
    }
    let data = builder
        .row(SourceRow::new(None, None, vec![Some(1e9)]))
        .build()
        .unwrap();

    let output = Pipeline::new(PipelineConfig::default())
        .unwrap()
        .run(&data, &[])
        .unwrap();
    assert_eq!(output.index.len(), 24);
    assert_eq!(output.anchor_year, 2024);
    assert!(output.series[0].final_forecast.iter().all(|v| *v < 200.0));
}

#[test]
fn no_periods_is_a_configuration_error() {
    let data = Dataset::builder()
        .labels(["North"])
        .row(SourceRow::new(None, Some(1), vec![Some(1.0)]))
        .build()
        .unwrap();
    let err = Pipeline::new(PipelineConfig::default())
        .unwrap()
        .run(&data, &[])
        .unwrap_err();
    assert_eq!(err, ForecastError::EmptyData);
}

#[test]
fn unanchorable_year_fails_the_run() {
    let index = TimeIndex::new(vec![Period::new(i32::MAX, 1).unwrap()]);
    let data = Dataset::new(index, vec![Series::new(0, "North", vec![Some(1.0)])]).unwrap();
    let err = Pipeline::new(PipelineConfig::default())
        .unwrap()
        .run(&data, &[])
        .unwrap_err();
    assert!(matches!(err, ForecastError::AnchorYear(_)));
}

#[test]
fn single_valid_point_gives_zero_trend() {
    let mut values = vec![None; 18];
    values[4] = Some(42.0);
    let data = monthly_dataset(&["Sparse"], vec![values]);
    let output = Pipeline::new(PipelineConfig::default())
        .unwrap()
        .run(&data, &[])
        .unwrap();
    let sparse = &output.series[0];
    assert!(sparse.trend.is_degenerate());
    assert_eq!(sparse.trend_coefficients(), (0.0, 0.0));
    assert!(sparse.final_forecast.iter().all(|v| *v == 0.0));
}

#[test]
fn regression_axis_changes_gapped_fit() {
    let values: Vec<Observation> = (0..24)
        .map(|i| if i % 3 == 1 { None } else { Some(100.0 + 2.0 * i as f64) })
        .collect();
    let data = monthly_dataset(&["Gappy"], vec![values]);

    let compacted = Pipeline::new(PipelineConfig::default().with_half_width(0))
        .unwrap()
        .run(&data, &[])
        .unwrap();
    let by_period = Pipeline::new(
        PipelineConfig::default()
            .with_half_width(0)
            .with_regression_axis(RegressionAxis::PeriodNumber),
    )
    .unwrap()
    .run(&data, &[])
    .unwrap();

    assert!(compacted.series[0].trend.slope > by_period.series[0].trend.slope);
}

#[test]
fn full_precision_differs_only_slightly_from_chained() {
    let values: Vec<Observation> = (0..36)
        .map(|i| Some(100.0 + i as f64 / 3.0 + 7.0 * ((i % 12) as f64).sin()))
        .collect();
    let data = monthly_dataset(&["North"], vec![values]);

    let chained = Pipeline::new(PipelineConfig::default())
        .unwrap()
        .run(&data, &[])
        .unwrap();
    let full = Pipeline::new(PipelineConfig::default().with_rounding(RoundingPolicy::FullPrecision))
        .unwrap()
        .run(&data, &[])
        .unwrap();

    for (a, b) in chained.series[0]
        .final_forecast
        .iter()
        .zip(&full.series[0].final_forecast)
    {
        assert!((a - b).abs() < 0.5, "{} vs {}", a, b);
    }
}

#[test]
fn config_file_drives_the_run() {
    let config = PipelineConfig::from_json(
        r#"{ "half_width": 1, "smoothing": "trailing_cumulative", "anchor_year": 2031, "parallel": false }"#,
    )
    .unwrap();
    let data = monthly_dataset(&["North"], vec![(0..12).map(|i| Some(i as f64)).collect()]);
    let output = Pipeline::new(config).unwrap().run(&data, &[]).unwrap();
    assert_eq!(output.anchor_year, 2031);
    assert_eq!(output.forecast_periods[0].to_string(), "2031-01");
    assert_eq!(output.series[0].smoothed[3], Some(1.5));
}
