//! Utility functions shared by the pipeline stages.

pub mod ols;
pub mod rounding;
pub mod stats;

pub use ols::{simple_ols, SimpleOlsResult};
pub use rounding::{round_to, RoundingPolicy, INDEX_DECIMALS, VALUE_DECIMALS};
pub use stats::{valid_mean, valid_positions};
