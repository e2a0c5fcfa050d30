//! Moving-average smoothing of gap-bearing monthly sequences.
//!
//! Two strategies are provided behind [`SmoothingStrategy`]:
//! - [`CenteredMovingAverage`]: window `[i-k, i+k]`, shrinking symmetrically at
//!   both boundaries (the default)
//! - [`TrailingCumulativeAverage`]: mean of everything observed up to `i`
//!
//! # Example
//!
//! ```
//! use trendcast::transform::{CenteredMovingAverage, SmoothingStrategy};
//!
//! let raw = vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)];
//! let smoothed = CenteredMovingAverage::new(1).smooth(&raw);
//! assert_eq!(smoothed, vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(5.0)]);
//! ```

use crate::core::Observation;
use crate::utils::{valid_mean, RoundingPolicy};
use serde::{Deserialize, Serialize};

/// A smoothing rule mapping a raw sequence to an equally long smoothed one.
///
/// Implementations must keep gap positions as gaps.
pub trait SmoothingStrategy: Send + Sync {
    /// Smooth the raw sequence, returning one output per input position.
    fn smooth(&self, raw: &[Observation]) -> Vec<Observation>;

    /// Strategy name for logs.
    fn name(&self) -> &str;
}

/// Centered moving average with half-width `k` (full window `2k+1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenteredMovingAverage {
    half_width: usize,
    rounding: RoundingPolicy,
}

impl CenteredMovingAverage {
    pub fn new(half_width: usize) -> Self {
        Self {
            half_width,
            rounding: RoundingPolicy::Chained,
        }
    }

    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }

    pub fn half_width(&self) -> usize {
        self.half_width
    }

    /// Half-open window `[start, end)` used at position `i` of a length-`n` sequence.
    pub fn window(&self, i: usize, n: usize) -> (usize, usize) {
        let k = self.half_width;
        if i < k {
            (0, (2 * i + 1).min(n))
        } else if i + k >= n {
            ((2 * i + 1).saturating_sub(n), n)
        } else {
            (i - k, i + k + 1)
        }
    }
}

impl Default for CenteredMovingAverage {
    fn default() -> Self {
        Self::new(2)
    }
}

impl SmoothingStrategy for CenteredMovingAverage {
    fn smooth(&self, raw: &[Observation]) -> Vec<Observation> {
        let n = raw.len();
        (0..n)
            .map(|i| {
                raw[i]?;
                let (start, end) = self.window(i, n);
                valid_mean(&raw[start..end]).map(|avg| self.rounding.value(avg))
            })
            .collect()
    }

    fn name(&self) -> &str {
        "CenteredMovingAverage"
    }
}

/// Cumulative mean of all non-gap values in `[0, i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrailingCumulativeAverage {
    rounding: RoundingPolicy,
}

impl TrailingCumulativeAverage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rounding(mut self, rounding: RoundingPolicy) -> Self {
        self.rounding = rounding;
        self
    }
}

impl SmoothingStrategy for TrailingCumulativeAverage {
    fn smooth(&self, raw: &[Observation]) -> Vec<Observation> {
        let mut sum = 0.0;
        let mut count = 0usize;
        raw.iter()
            .map(|value| {
                let v = (*value)?;
                sum += v;
                count += 1;
                Some(self.rounding.value(sum / count as f64))
            })
            .collect()
    }

    fn name(&self) -> &str {
        "TrailingCumulativeAverage"
    }
}

/// Configurable choice of smoothing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SmoothingMethod {
    /// [`CenteredMovingAverage`].
    #[default]
    Centered,
    /// [`TrailingCumulativeAverage`].
    TrailingCumulative,
}

impl SmoothingMethod {
    /// Instantiate the strategy for the given half-width and rounding policy.
    ///
    /// The half-width is ignored by the cumulative strategy.
    pub fn strategy(
        self,
        half_width: usize,
        rounding: RoundingPolicy,
    ) -> Box<dyn SmoothingStrategy> {
        match self {
            SmoothingMethod::Centered => {
                Box::new(CenteredMovingAverage::new(half_width).with_rounding(rounding))
            }
            SmoothingMethod::TrailingCumulative => {
                Box::new(TrailingCumulativeAverage::new().with_rounding(rounding))
            }
        }
    }
}

/// Centered moving average with half-width `k` and chained rounding.
pub fn smooth(raw: &[Observation], k: usize) -> Vec<Observation> {
    CenteredMovingAverage::new(k).smooth(raw)
}
