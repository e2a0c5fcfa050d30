//! Per-series stage values.
//!
//! Each stage consumes the previous stage's value and returns a new one, so a
//! stage cannot run before its input exists.

use super::context::PipelineContext;
use super::output::SeriesForecast;
use crate::core::{Observation, Series};
use crate::error::Result;
use crate::factors::{compose_with, FactorRecord};
use crate::models::{fit_and_forecast_with, TrendFit};
use crate::seasonality::{seasonalize_with, SeasonalIndices};
use crate::transform::SmoothingStrategy;

/// Lifecycle of a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Stage {
    Loaded,
    Smoothed,
    Deseasonalized,
    Trended,
    Composed,
    Final,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Loaded => "loaded",
            Stage::Smoothed => "smoothed",
            Stage::Deseasonalized => "deseasonalized",
            Stage::Trended => "trended",
            Stage::Composed => "composed",
            Stage::Final => "final",
        };
        f.write_str(name)
    }
}

/// Series with its smoothed sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedSeries {
    pub series: Series,
    pub smoothed: Vec<Observation>,
}

impl SmoothedSeries {
    pub fn new(series: Series, strategy: &dyn SmoothingStrategy) -> Self {
        let smoothed = strategy.smooth(series.values());
        tracing::debug!(
            series = series.label(),
            strategy = strategy.name(),
            stage = %Stage::Smoothed,
            "stage complete"
        );
        Self { series, smoothed }
    }

    pub fn deseasonalize(self, ctx: &PipelineContext) -> Result<DeseasonalizedSeries> {
        let seasonal = seasonalize_with(&self.smoothed, ctx.months(), ctx.rounding())?;
        tracing::debug!(
            series = self.series.label(),
            index_sum = seasonal.indices.sum(),
            stage = %Stage::Deseasonalized,
            "stage complete"
        );
        Ok(DeseasonalizedSeries {
            series: self.series,
            smoothed: self.smoothed,
            indices: seasonal.indices,
            deseasonalized: seasonal.deseasonalized,
        })
    }
}

/// Series with its seasonal profile and deseasonalized history.
#[derive(Debug, Clone, PartialEq)]
pub struct DeseasonalizedSeries {
    pub series: Series,
    pub smoothed: Vec<Observation>,
    pub indices: SeasonalIndices,
    pub deseasonalized: Vec<Observation>,
}

impl DeseasonalizedSeries {
    pub fn fit_trend(self, ctx: &PipelineContext) -> TrendedSeries {
        let trend = fit_and_forecast_with(
            &self.deseasonalized,
            ctx.horizon(),
            ctx.regression_axis(),
            ctx.rounding(),
        );
        if trend.is_degenerate() {
            tracing::debug!(
                series = self.series.label(),
                valid_points = trend.valid_points,
                "too few points for a trend, using zero line"
            );
        }
        tracing::debug!(
            series = self.series.label(),
            intercept = trend.intercept,
            slope = trend.slope,
            stage = %Stage::Trended,
            "stage complete"
        );
        TrendedSeries {
            series: self.series,
            smoothed: self.smoothed,
            indices: self.indices,
            deseasonalized: self.deseasonalized,
            trend,
        }
    }
}

/// Series with its trend line and 12-month trend forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendedSeries {
    pub series: Series,
    pub smoothed: Vec<Observation>,
    pub indices: SeasonalIndices,
    pub deseasonalized: Vec<Observation>,
    pub trend: TrendFit,
}

impl TrendedSeries {
    /// Reseasonalize the trend forecast and apply the series' factors in order.
    pub fn compose(
        self,
        factors: &[&FactorRecord],
        ctx: &PipelineContext,
    ) -> Result<SeriesForecast> {
        let composition =
            compose_with(&self.trend.forecast, &self.indices, factors, ctx.rounding())?;
        tracing::debug!(
            series = self.series.label(),
            factors = factors.len(),
            stage = %Stage::Composed,
            "stage complete"
        );
        Ok(SeriesForecast {
            column: self.series.column(),
            label: self.series.label().to_string(),
            raw: self.series.values().to_vec(),
            smoothed: self.smoothed,
            indices: self.indices,
            deseasonalized: self.deseasonalized,
            trend: self.trend,
            reseasonalized: composition.reseasonalized,
            factors: factors.iter().map(|&f| f.clone()).collect(),
            final_forecast: composition.final_forecast,
        })
    }
}

/// Run one series through every stage.
pub fn run_series(
    series: Series,
    strategy: &dyn SmoothingStrategy,
    factors: &[&FactorRecord],
    ctx: &PipelineContext,
) -> Result<SeriesForecast> {
    SmoothedSeries::new(series, strategy)
        .deseasonalize(ctx)?
        .fit_trend(ctx)
        .compose(factors, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TimeIndex;
    use crate::factors::FactorKind;
    use crate::pipeline::PipelineConfig;
    use crate::transform::CenteredMovingAverage;

    #[test]
    fn stages_are_ordered() {
        assert!(Stage::Loaded < Stage::Smoothed);
        assert!(Stage::Trended < Stage::Composed);
        assert!(Stage::Composed < Stage::Final);
        assert_eq!(Stage::Deseasonalized.to_string(), "deseasonalized");
    }

    #[test]
    fn series_flows_through_all_stages() {
        let index = TimeIndex::monthly(2022, 1, 24).unwrap();
        let ctx = PipelineContext::new(&index, &PipelineConfig::default()).unwrap();
        let values: Vec<Observation> = (0..24).map(|i| Some(100.0 + i as f64)).collect();
        let series = Series::new(3, "Kyiv", values);
        let factor = FactorRecord::new("kyiv", FactorKind::Additive, vec![Some(1.0); 12]);

        let strategy = CenteredMovingAverage::new(0);
        let smoothed = SmoothedSeries::new(series, &strategy);
        assert_eq!(smoothed.smoothed[5], Some(105.0));

        let deseasonalized = smoothed.deseasonalize(&ctx).unwrap();
        assert_eq!(deseasonalized.deseasonalized.len(), 24);

        let trended = deseasonalized.fit_trend(&ctx);
        assert_eq!(trended.trend.forecast.len(), 12);

        let result = trended.compose(&[&factor], &ctx).unwrap();
        assert_eq!(result.column, 3);
        assert_eq!(result.final_forecast.len(), 12);
        for (base, last) in result.reseasonalized.iter().zip(&result.final_forecast) {
            assert!((last - (base + 1.0)).abs() < 1e-9);
        }
    }
}
