//! Gap-aware statistical helpers.

use crate::core::Observation;

/// Mean of the non-gap values, or `None` when every value is a gap.
///
/// # Example
/// ```
/// use trendcast::utils::valid_mean;
///
/// assert_eq!(valid_mean(&[Some(1.0), None, Some(3.0)]), Some(2.0));
/// assert_eq!(valid_mean(&[None, None]), None);
/// ```
pub fn valid_mean(values: &[Observation]) -> Option<f64> {
    let (sum, count) = values
        .iter()
        .flatten()
        .fold((0.0, 0usize), |(sum, count), &v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Non-gap values paired with their 1-based original position.
pub fn valid_positions(values: &[Observation]) -> Vec<(f64, f64)> {
    values
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| ((i + 1) as f64, v)))
        .collect()
}
