//! Decimal rounding and the policy controlling intermediate precision.

use serde::{Deserialize, Serialize};

/// Decimals kept for values (smoothed, deseasonalized, trend, forecasts).
pub const VALUE_DECIMALS: i32 = 2;

/// Decimals kept for seasonal indices.
pub const INDEX_DECIMALS: i32 = 4;

/// Round to `decimals` places, ties to even, decided on the exact binary value.
///
/// `value * 10^decimals` is generally inexact, so the rounding error of the
/// product is recovered with a fused multiply-add and used to break apparent
/// ties: `2.675` (stored slightly below) rounds down, `0.125` (exact) rounds
/// to the even neighbour.
///
/// # Example
/// ```
/// use trendcast::utils::round_to;
///
/// assert_eq!(round_to(0.125, 2), 0.12);
/// assert_eq!(round_to(0.375, 2), 0.38);
/// assert_eq!(round_to(2.675, 2), 2.67);
/// ```
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let scaled = value * factor;
    if !scaled.is_finite() || scaled.abs() >= 4_503_599_627_370_496.0 {
        // Non-finite, or already integral at this magnitude.
        return value;
    }
    // value * factor == scaled + error exactly.
    let error = value.mul_add(factor, -scaled);

    let lower = scaled.floor();
    let midpoint = lower + 0.5;
    let above = if scaled != midpoint {
        scaled > midpoint
    } else if error != 0.0 {
        error > 0.0
    } else {
        lower % 2.0 != 0.0
    };
    let rounded = if above { lower + 1.0 } else { lower };
    rounded / factor
}

/// Whether intermediate results are rounded before the next stage consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingPolicy {
    /// Round at every stage boundary (ties to even) and feed the rounded value forward.
    #[default]
    Chained,
    /// Carry full precision through every stage.
    FullPrecision,
}

impl RoundingPolicy {
    /// Apply the policy to a value at the given decimals.
    pub fn apply(self, value: f64, decimals: i32) -> f64 {
        match self {
            RoundingPolicy::Chained => round_to(value, decimals),
            RoundingPolicy::FullPrecision => value,
        }
    }

    pub fn value(self, value: f64) -> f64 {
        self.apply(value, VALUE_DECIMALS)
    }

    pub fn index(self, value: f64) -> f64 {
        self.apply(value, INDEX_DECIMALS)
    }
}
