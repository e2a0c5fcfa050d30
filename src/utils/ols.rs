//! Ordinary Least Squares (OLS) fit of a straight line.
//!
//! Used by the trend stage to fit `y = intercept + slope * x`.

use crate::error::{ForecastError, Result};

/// Straight-line OLS coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimpleOlsResult {
    /// Intercept term.
    pub intercept: f64,
    /// Slope of the fitted line.
    pub slope: f64,
    /// Coefficient of determination.
    pub r_squared: f64,
}

impl SimpleOlsResult {
    /// Value of the fitted line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Fit `y = intercept + slope * x` minimizing squared residuals.
///
/// Requires at least two points. Identical `x` values give a flat line
/// through the mean of `y`.
pub fn simple_ols(x: &[f64], y: &[f64]) -> Result<SimpleOlsResult> {
    if x.len() != y.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: x.len(),
            got: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(ForecastError::InsufficientData {
            needed: 2,
            got: x.len(),
        });
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    let mean_y = y.iter().sum::<f64>() / n;

    // Centered sums keep the normal equations well conditioned for large x.
    let ss_xx: f64 = x.iter().map(|&xi| (xi - mean_x).powi(2)).sum();
    let ss_xy: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .sum();

    if ss_xx.abs() < 1e-10 {
        return Ok(SimpleOlsResult {
            intercept: mean_y,
            slope: 0.0,
            r_squared: 0.0,
        });
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    let ss_yy: f64 = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum();
    let ss_res: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(&xi, &yi)| (yi - (intercept + slope * xi)).powi(2))
        .sum();

    let r_squared = if ss_yy.abs() < 1e-10 {
        1.0
    } else {
        1.0 - ss_res / ss_yy
    };

    Ok(SimpleOlsResult {
        intercept,
        slope,
        r_squared,
    })
}
