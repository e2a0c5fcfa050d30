//! Trend models.

pub mod trend;

pub use trend::{fit_and_forecast, fit_and_forecast_with, RegressionAxis, TrendFit};
