//! Monthly seasonal indices and deseasonalization.
//!
//! For each calendar month the index is the ratio of that month's average
//! smoothed value to the series' overall average, rescaled so the twelve
//! indices sum to 12 (mean index 1.0). Months without data, or a series
//! whose overall average is zero or undefined, get the neutral ratio 1.0.

use crate::core::{Observation, MONTHS_PER_YEAR};
use crate::error::{ForecastError, Result};
use crate::utils::{valid_mean, RoundingPolicy};

/// Twelve seasonal indices for one series, keyed by calendar month 1..=12.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonalIndices {
    unnormalized: [f64; MONTHS_PER_YEAR],
    normalized: [f64; MONTHS_PER_YEAR],
}

impl SeasonalIndices {
    /// Neutral profile: every month 1.0.
    pub fn neutral() -> Self {
        Self {
            unnormalized: [1.0; MONTHS_PER_YEAR],
            normalized: [1.0; MONTHS_PER_YEAR],
        }
    }

    /// Normalize raw month ratios so they sum to 12.
    pub fn from_ratios(ratios: [f64; MONTHS_PER_YEAR], rounding: RoundingPolicy) -> Self {
        let total: f64 = ratios.iter().sum();
        let scale = if total != 0.0 {
            MONTHS_PER_YEAR as f64 / total
        } else {
            1.0
        };
        let normalized = ratios.map(|r| rounding.index(r * scale));
        Self {
            unnormalized: ratios,
            normalized,
        }
    }

    /// Normalized index for `month` (1..=12).
    pub fn get(&self, month: u32) -> Result<f64> {
        slot(month).map(|s| self.normalized[s])
    }

    /// Ratio before normalization for `month` (1..=12).
    pub fn unnormalized(&self, month: u32) -> Result<f64> {
        slot(month).map(|s| self.unnormalized[s])
    }

    /// All normalized indices, January first.
    pub fn values(&self) -> &[f64; MONTHS_PER_YEAR] {
        &self.normalized
    }

    pub fn unnormalized_values(&self) -> &[f64; MONTHS_PER_YEAR] {
        &self.unnormalized
    }

    pub fn sum(&self) -> f64 {
        self.normalized.iter().sum()
    }

    /// Remove the month's seasonal effect. A zero index or a gap yields a gap.
    pub fn deseasonalize(&self, value: Observation, month: u32) -> Result<Observation> {
        let index = self.get(month)?;
        Ok(match value {
            Some(v) if index != 0.0 => Some(v / index),
            _ => None,
        })
    }

    /// Re-apply the month's seasonal effect.
    pub fn reseasonalize(&self, value: f64, month: u32) -> Result<f64> {
        Ok(value * self.get(month)?)
    }
}

impl Default for SeasonalIndices {
    fn default() -> Self {
        Self::neutral()
    }
}

fn slot(month: u32) -> Result<usize> {
    if (1..=MONTHS_PER_YEAR as u32).contains(&month) {
        Ok((month - 1) as usize)
    } else {
        Err(ForecastError::InvalidMonth(month))
    }
}

/// Seasonal profile together with the deseasonalized history.
#[derive(Debug, Clone, PartialEq)]
pub struct Seasonalized {
    pub indices: SeasonalIndices,
    pub deseasonalized: Vec<Observation>,
}

/// Compute seasonal indices from a smoothed sequence and deseasonalize it.
///
/// `month_of[i]` is the calendar month (1..=12) of position `i`.
pub fn seasonalize(smoothed: &[Observation], month_of: &[u32]) -> Result<Seasonalized> {
    seasonalize_with(smoothed, month_of, RoundingPolicy::Chained)
}

/// [`seasonalize`] with an explicit rounding policy.
pub fn seasonalize_with(
    smoothed: &[Observation],
    month_of: &[u32],
    rounding: RoundingPolicy,
) -> Result<Seasonalized> {
    if smoothed.len() != month_of.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: month_of.len(),
            got: smoothed.len(),
        });
    }

    let mut sums = [0.0; MONTHS_PER_YEAR];
    let mut counts = [0usize; MONTHS_PER_YEAR];
    for (value, &month) in smoothed.iter().zip(month_of) {
        let s = slot(month)?;
        if let Some(v) = value {
            sums[s] += v;
            counts[s] += 1;
        }
    }

    let overall = valid_mean(smoothed);
    let mut ratios = [1.0; MONTHS_PER_YEAR];
    for (s, ratio) in ratios.iter_mut().enumerate() {
        if let Some(overall) = overall.filter(|&avg| avg != 0.0) {
            if counts[s] > 0 {
                *ratio = (sums[s] / counts[s] as f64) / overall;
            }
        }
    }

    let indices = SeasonalIndices::from_ratios(ratios, rounding);
    let deseasonalized = smoothed
        .iter()
        .zip(month_of)
        .map(|(&value, &month)| {
            indices
                .deseasonalize(value, month)
                .map(|d| d.map(|d| rounding.value(d)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Seasonalized {
        indices,
        deseasonalized,
    })
}
