//! Data transformations for monthly series.
//!
//! Provides the smoothing stage of the pipeline.

pub mod smoothing;

pub use smoothing::{
    smooth, CenteredMovingAverage, SmoothingMethod, SmoothingStrategy, TrailingCumulativeAverage,
};
