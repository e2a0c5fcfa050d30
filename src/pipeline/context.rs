//! Immutable run context shared by every stage.

use super::config::PipelineConfig;
use crate::core::{Period, TimeIndex, MONTHS_PER_YEAR};
use crate::error::{ForecastError, Result};
use crate::models::RegressionAxis;
use crate::utils::RoundingPolicy;
use chrono::NaiveDate;

/// Forecast horizon in months.
pub const FORECAST_HORIZON: usize = MONTHS_PER_YEAR;

/// Values every stage reads and none modifies.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineContext {
    index: TimeIndex,
    months: Vec<u32>,
    anchor_year: i32,
    rounding: RoundingPolicy,
    regression_axis: RegressionAxis,
}

impl PipelineContext {
    /// Establish the context for a dataset's time index.
    ///
    /// Fails on an empty index, or when no forecast year can be anchored on
    /// the calendar.
    pub fn new(index: &TimeIndex, config: &PipelineConfig) -> Result<Self> {
        if index.is_empty() {
            return Err(ForecastError::EmptyData);
        }
        let anchor_year = match config.anchor_year {
            Some(year) => year,
            None => index.next_year().ok_or_else(|| {
                ForecastError::AnchorYear("no calendar-valid period in the input".to_string())
            })?,
        };
        if NaiveDate::from_ymd_opt(anchor_year, 1, 1).is_none() {
            return Err(ForecastError::AnchorYear(format!(
                "year {} is outside the calendar range",
                anchor_year
            )));
        }

        Ok(Self {
            months: index.months(),
            index: index.clone(),
            anchor_year,
            rounding: config.rounding,
            regression_axis: config.regression_axis,
        })
    }

    /// Historical period count `n`.
    pub fn period_count(&self) -> usize {
        self.index.len()
    }

    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    /// Calendar month of each historical position.
    pub fn months(&self) -> &[u32] {
        &self.months
    }

    pub fn anchor_year(&self) -> i32 {
        self.anchor_year
    }

    pub fn horizon(&self) -> usize {
        FORECAST_HORIZON
    }

    pub fn forecast_periods(&self) -> Vec<Period> {
        TimeIndex::forecast_periods(self.anchor_year)
    }

    pub fn rounding(&self) -> RoundingPolicy {
        self.rounding
    }

    pub fn regression_axis(&self) -> RegressionAxis {
        self.regression_axis
    }
}
