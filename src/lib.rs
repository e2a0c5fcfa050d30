//! # trendcast
//!
//! Twelve-month forecasting for monthly multi-series data.
//!
//! Each series goes through centered moving-average smoothing, calendar-month
//! seasonal indices and deseasonalization, a least-squares linear trend
//! extrapolated one year ahead, and finally reseasonalization combined with
//! externally supplied multiplicative or additive adjustment factors.

pub mod core;
pub mod error;
pub mod factors;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod seasonality;
pub mod transform;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{Dataset, Observation, Period, Series, SourceRow, TimeIndex};
    pub use crate::error::{ForecastError, Result};
    pub use crate::factors::{FactorKind, FactorRecord, RawFactor};
    pub use crate::io::{FactorSource, ForecastSink, MemorySink, NoFactors, ObservationSource};
    pub use crate::pipeline::{Pipeline, PipelineConfig, PipelineOutput, SeriesForecast};
    pub use crate::transform::{SmoothingMethod, SmoothingStrategy};
    pub use crate::utils::RoundingPolicy;
}
