//! Seasonal profile estimation.
//!
//! This module provides calendar-month seasonal indices:
//! - `seasonalize`: per-month indices normalized to mean 1.0 plus the
//!   deseasonalized history

mod monthly;

pub use monthly::{seasonalize, seasonalize_with, SeasonalIndices, Seasonalized};
