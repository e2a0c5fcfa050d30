//! The forecasting pipeline.
//!
//! Stages run in a fixed order for every series:
//! smoothing, seasonal indices and deseasonalization, linear trend,
//! then reseasonalization with adjustment factors.

mod config;
mod context;
mod orchestrator;
mod output;
mod stages;

pub use config::{PipelineConfig, MAX_HALF_WIDTH};
pub use context::{PipelineContext, FORECAST_HORIZON};
pub use orchestrator::Pipeline;
pub use output::{PipelineOutput, SeriesForecast};
pub use stages::{
    run_series, DeseasonalizedSeries, SmoothedSeries, Stage, TrendedSeries,
};
