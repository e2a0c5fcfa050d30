//! Pipeline configuration.

use crate::error::{ForecastError, Result};
use crate::models::RegressionAxis;
use crate::transform::SmoothingMethod;
use crate::utils::RoundingPolicy;
use serde::{Deserialize, Serialize};

/// Largest accepted smoothing half-width.
pub const MAX_HALF_WIDTH: usize = 10;

/// User-facing settings of one pipeline run.
///
/// # Example
///
/// ```
/// use trendcast::pipeline::PipelineConfig;
///
/// let config = PipelineConfig::from_json(r#"{ "half_width": 3, "anchor_year": 2025 }"#).unwrap();
/// assert_eq!(config.half_width, 3);
/// assert_eq!(config.anchor_year, Some(2025));
/// assert!(config.parallel);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Moving-average half-width `k` shared by all series.
    pub half_width: usize,
    /// Smoothing strategy.
    pub smoothing: SmoothingMethod,
    /// Intermediate rounding behaviour.
    pub rounding: RoundingPolicy,
    /// Independent variable of the trend regression.
    pub regression_axis: RegressionAxis,
    /// Calendar year of the forecast; derived from the data when absent.
    pub anchor_year: Option<i32>,
    /// Process series on the rayon pool.
    pub parallel: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            half_width: 2,
            smoothing: SmoothingMethod::default(),
            rounding: RoundingPolicy::default(),
            regression_axis: RegressionAxis::default(),
            anchor_year: None,
            parallel: true,
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_half_width(mut self, k: usize) -> Self {
        self.half_width = k;
        self
    }

    pub fn with_smoothing(mut self, method: SmoothingMethod) -> Self {
        self.smoothing = method;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn with_regression_axis(mut self, axis: RegressionAxis) -> Self {
        self.regression_axis = axis;
        self
    }

    pub fn with_anchor_year(mut self, year: i32) -> Self {
        self.anchor_year = Some(year);
        self
    }

    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.half_width > MAX_HALF_WIDTH {
            return Err(ForecastError::InvalidParameter(format!(
                "half_width must be at most {}, got {}",
                MAX_HALF_WIDTH, self.half_width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = PipelineConfig::default();
        assert_eq!(config.half_width, 2);
        assert_eq!(config.smoothing, SmoothingMethod::Centered);
        assert_eq!(config.rounding, RoundingPolicy::Chained);
        assert_eq!(config.regression_axis, RegressionAxis::Compacted);
        assert_eq!(config.anchor_year, None);
        assert!(config.parallel);
    }

    #[test]
    fn json_round_trip_keeps_settings() {
        let config = PipelineConfig::new()
            .with_half_width(4)
            .with_smoothing(SmoothingMethod::TrailingCumulative)
            .with_rounding(RoundingPolicy::FullPrecision)
            .with_regression_axis(RegressionAxis::PeriodNumber)
            .with_anchor_year(2030)
            .sequential();
        let json = config.to_json().unwrap();
        assert!(json.contains("\"trailing_cumulative\""));
        assert_eq!(PipelineConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn rejects_oversized_half_width() {
        let err = PipelineConfig::from_json(r#"{ "half_width": 11 }"#).unwrap_err();
        assert!(matches!(err, ForecastError::InvalidParameter(_)));
        assert!(PipelineConfig::new().with_half_width(10).validate().is_ok());
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = PipelineConfig::from_json(r#"{ "half_width": -1 }"#).unwrap_err();
        assert!(matches!(err, ForecastError::Config(_)));
    }
}
