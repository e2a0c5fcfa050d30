//! Results handed to a forecast sink.

use crate::core::{Observation, Period, TimeIndex};
use crate::factors::{normalize_label, FactorRecord};
use crate::models::TrendFit;
use crate::seasonality::SeasonalIndices;
use crate::utils::{round_to, VALUE_DECIMALS};

/// Every artifact computed for one series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesForecast {
    /// Source column index of the series.
    pub column: usize,
    /// Display label.
    pub label: String,
    pub raw: Vec<Observation>,
    pub smoothed: Vec<Observation>,
    pub indices: SeasonalIndices,
    pub deseasonalized: Vec<Observation>,
    pub trend: TrendFit,
    /// Trend forecast times the month's seasonal index.
    pub reseasonalized: Vec<f64>,
    /// Factors applied, in application order.
    pub factors: Vec<FactorRecord>,
    pub final_forecast: Vec<f64>,
}

impl SeriesForecast {
    /// Intercept and slope rounded for display.
    pub fn trend_coefficients(&self) -> (f64, f64) {
        (
            round_to(self.trend.intercept, VALUE_DECIMALS),
            round_to(self.trend.slope, VALUE_DECIMALS),
        )
    }

    /// Final forecast for calendar month `month` (1..=12).
    pub fn final_for_month(&self, month: u32) -> Option<f64> {
        let slot = (month as usize).checked_sub(1)?;
        self.final_forecast.get(slot).copied()
    }
}

/// Output of one complete pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Calendar year of the forecast horizon.
    pub anchor_year: i32,
    /// Historical time index.
    pub index: TimeIndex,
    /// The twelve forecast periods.
    pub forecast_periods: Vec<Period>,
    /// Per-series results in input order.
    pub series: Vec<SeriesForecast>,
}

impl PipelineOutput {
    /// Look up a series by label, ignoring case and whitespace.
    pub fn get(&self, label: &str) -> Option<&SeriesForecast> {
        let key = normalize_label(label);
        self.series.iter().find(|s| normalize_label(&s.label) == key)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
