//! Reseasonalization of the trend forecast and sequential factor application.

use super::record::FactorRecord;
use crate::core::MONTHS_PER_YEAR;
use crate::error::{ForecastError, Result};
use crate::seasonality::SeasonalIndices;
use crate::utils::RoundingPolicy;

/// Per-month result of composing one series' forecast.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    /// Trend forecast multiplied by the month's seasonal index.
    pub reseasonalized: Vec<f64>,
    /// Value after the last factor in the chain.
    pub final_forecast: Vec<f64>,
}

/// Compose the final forecast with chained rounding.
///
/// `forecast[m]` is the trend value for forecast month `m + 1`. Factor values
/// that are gaps leave the running value unchanged.
///
/// # Example
///
/// ```
/// use trendcast::factors::{compose, FactorKind, FactorRecord};
/// use trendcast::seasonality::SeasonalIndices;
///
/// let forecast = vec![100.0; 12];
/// let factors = vec![
///     FactorRecord::new("North", FactorKind::Multiplicative, vec![Some(1.10); 12]),
///     FactorRecord::new("North", FactorKind::Additive, vec![Some(5.0); 12]),
/// ];
/// let composed = compose(&forecast, &SeasonalIndices::neutral(), &factors).unwrap();
/// assert_eq!(composed.final_forecast[0], 115.0);
/// ```
pub fn compose(
    forecast: &[f64],
    indices: &SeasonalIndices,
    factors: &[FactorRecord],
) -> Result<Composition> {
    let chain: Vec<&FactorRecord> = factors.iter().collect();
    compose_with(forecast, indices, &chain, RoundingPolicy::Chained)
}

/// [`compose`] over borrowed records with an explicit rounding policy.
pub fn compose_with(
    forecast: &[f64],
    indices: &SeasonalIndices,
    factors: &[&FactorRecord],
    rounding: RoundingPolicy,
) -> Result<Composition> {
    if forecast.len() != MONTHS_PER_YEAR {
        return Err(ForecastError::DimensionMismatch {
            expected: MONTHS_PER_YEAR,
            got: forecast.len(),
        });
    }

    let mut reseasonalized = Vec::with_capacity(MONTHS_PER_YEAR);
    let mut final_forecast = Vec::with_capacity(MONTHS_PER_YEAR);

    for (slot, &trend) in forecast.iter().enumerate() {
        let month = slot as u32 + 1;
        let base = rounding.value(indices.reseasonalize(trend, month)?);
        let value = factors.iter().fold(base, |value, factor| {
            match factor.value_at(slot) {
                Some(f) => rounding.value(factor.kind().apply(value, f)),
                None => value,
            }
        });
        reseasonalized.push(base);
        final_forecast.push(value);
    }

    Ok(Composition {
        reseasonalized,
        final_forecast,
    })
}
