//! Core data structures for monthly multi-series data.

mod dataset;
mod time_index;

pub use dataset::{Dataset, DatasetBuilder, Observation, Series, SourceRow};
pub use time_index::{Period, TimeIndex, MONTHS_PER_YEAR};
