//! Sequencing of the stages over all series of a dataset.

use super::config::PipelineConfig;
use super::context::PipelineContext;
use super::output::{PipelineOutput, SeriesForecast};
use super::stages::{run_series, Stage};
use crate::core::Dataset;
use crate::error::Result;
use crate::factors::{associate_factors, FactorRecord};
use crate::io::{FactorSource, ForecastSink, ObservationSource};
use crate::transform::SmoothingStrategy;
use rayon::prelude::*;

/// Batch forecasting pipeline.
///
/// # Example
///
/// ```
/// use trendcast::core::{Dataset, Series, TimeIndex};
/// use trendcast::pipeline::{Pipeline, PipelineConfig};
///
/// let index = TimeIndex::monthly(2022, 1, 24).unwrap();
/// let values = (0..24).map(|i| Some(100.0 + i as f64)).collect();
/// let dataset = Dataset::new(index, vec![Series::new(0, "North", values)]).unwrap();
///
/// let output = Pipeline::new(PipelineConfig::default()).unwrap().run(&dataset, &[]).unwrap();
/// assert_eq!(output.anchor_year, 2024);
/// assert_eq!(output.get("north").unwrap().final_forecast.len(), 12);
/// ```
pub struct Pipeline {
    config: PipelineConfig,
    strategy: Box<dyn SmoothingStrategy>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pipeline")
            .field("config", &self.config)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

impl Pipeline {
    /// Build a pipeline using the configured smoothing method.
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        let strategy = config.smoothing.strategy(config.half_width, config.rounding);
        Ok(Self { config, strategy })
    }

    /// Build a pipeline with a caller-supplied smoothing strategy.
    pub fn with_strategy(config: PipelineConfig, strategy: Box<dyn SmoothingStrategy>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, strategy })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Forecast every series in `dataset`, applying matching `factors`.
    pub fn run(&self, dataset: &Dataset, factors: &[FactorRecord]) -> Result<PipelineOutput> {
        let ctx = PipelineContext::new(dataset.index(), &self.config)?;
        let span = tracing::info_span!(
            "pipeline",
            series = dataset.series_count(),
            periods = ctx.period_count(),
            anchor_year = ctx.anchor_year()
        );
        let _guard = span.enter();
        tracing::info!(stage = %Stage::Loaded, strategy = self.strategy.name(), "starting run");

        let grouped = associate_factors(dataset.series(), factors);
        let matched: usize = grouped.iter().map(Vec::len).sum();
        if matched < factors.len() {
            tracing::warn!(
                dropped = factors.len() - matched,
                "factor records without a matching series"
            );
        }

        let strategy = self.strategy.as_ref();
        let jobs: Vec<_> = dataset.series().iter().cloned().zip(grouped).collect();
        let series = if self.config.parallel {
            jobs.into_par_iter()
                .map(|(series, chain)| run_series(series, strategy, &chain, &ctx))
                .collect::<Result<Vec<SeriesForecast>>>()?
        } else {
            jobs.into_iter()
                .map(|(series, chain)| run_series(series, strategy, &chain, &ctx))
                .collect::<Result<Vec<SeriesForecast>>>()?
        };

        tracing::info!(stage = %Stage::Final, series = series.len(), "run complete");
        Ok(PipelineOutput {
            anchor_year: ctx.anchor_year(),
            forecast_periods: ctx.forecast_periods(),
            index: ctx.index().clone(),
            series,
        })
    }

    /// Load from the sources, run, and hand the result to the sink.
    pub fn execute<S, F, K>(&self, source: &S, factor_source: &F, sink: &mut K) -> Result<PipelineOutput>
    where
        S: ObservationSource + ?Sized,
        F: FactorSource + ?Sized,
        K: ForecastSink + ?Sized,
    {
        let dataset = source.load()?;
        let factors = factor_source.factors()?;
        let output = self.run(&dataset, &factors)?;
        sink.accept(&output)?;
        Ok(output)
    }
}
