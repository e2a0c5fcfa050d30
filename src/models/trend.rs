//! Linear trend fitted to a deseasonalized history and extrapolated.

use crate::core::Observation;
use crate::utils::{simple_ols, valid_positions, RoundingPolicy};
use serde::{Deserialize, Serialize};

/// Independent variable used by the regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressionAxis {
    /// Dense 1..m numbering of the valid observations, ignoring gap spacing.
    #[default]
    Compacted,
    /// Original 1-based period number of each valid observation.
    PeriodNumber,
}

/// Fitted trend line plus its in-sample and out-of-sample values.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendFit {
    /// Intercept of the line.
    pub intercept: f64,
    /// Slope per period.
    pub slope: f64,
    /// Number of non-gap points the line was fitted on.
    pub valid_points: usize,
    /// Line evaluated at periods 1..=n.
    pub fitted: Vec<f64>,
    /// Line evaluated at periods n+1..=n+horizon.
    pub forecast: Vec<f64>,
}

impl TrendFit {
    /// Whether fewer than two valid points forced the zero trend.
    pub fn is_degenerate(&self) -> bool {
        self.valid_points < 2
    }
}

/// Fit a least-squares line over the valid deseasonalized points and
/// extrapolate `horizon` periods, using the compacted axis and chained rounding.
///
/// # Example
///
/// ```
/// use trendcast::models::fit_and_forecast;
///
/// let history: Vec<Option<f64>> = (1..=6).map(|i| Some(3.0 + 2.0 * i as f64)).collect();
/// let trend = fit_and_forecast(&history, 2);
/// assert_eq!(trend.forecast, vec![17.0, 19.0]);
/// ```
pub fn fit_and_forecast(deseasonalized: &[Observation], horizon: usize) -> TrendFit {
    fit_and_forecast_with(
        deseasonalized,
        horizon,
        RegressionAxis::Compacted,
        RoundingPolicy::Chained,
    )
}

/// [`fit_and_forecast`] with explicit axis and rounding policy.
pub fn fit_and_forecast_with(
    deseasonalized: &[Observation],
    horizon: usize,
    axis: RegressionAxis,
    rounding: RoundingPolicy,
) -> TrendFit {
    let points = valid_positions(deseasonalized);
    let x: Vec<f64> = match axis {
        RegressionAxis::Compacted => (1..=points.len()).map(|i| i as f64).collect(),
        RegressionAxis::PeriodNumber => points.iter().map(|&(t, _)| t).collect(),
    };
    let y: Vec<f64> = points.iter().map(|&(_, v)| v).collect();

    // Fewer than two points leaves the zero line.
    let (intercept, slope) = match simple_ols(&x, &y) {
        Ok(fit) => (fit.intercept, fit.slope),
        Err(_) => (0.0, 0.0),
    };

    let n = deseasonalized.len();
    let line = |t: usize| rounding.value(intercept + slope * t as f64);

    TrendFit {
        intercept,
        slope,
        valid_points: points.len(),
        fitted: (1..=n).map(line).collect(),
        forecast: (n + 1..=n + horizon).map(line).collect(),
    }
}
