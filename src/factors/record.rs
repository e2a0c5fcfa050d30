//! Adjustment factor records and their association with series.

use crate::core::{Observation, Series, MONTHS_PER_YEAR};
use crate::error::{ForecastError, Result};
use std::collections::HashMap;
use std::str::FromStr;

/// How a factor combines with the running forecast value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorKind {
    /// Coefficient: `value * f`.
    Multiplicative,
    /// Fixed amount in series units: `value + f`.
    Additive,
}

impl FactorKind {
    /// Apply one factor value to `value`.
    pub fn apply(self, value: f64, factor: f64) -> f64 {
        match self {
            FactorKind::Multiplicative => value * factor,
            FactorKind::Additive => value + factor,
        }
    }
}

impl FromStr for FactorKind {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "коефіцієнт" | "coefficient" | "multiplicative" => Ok(FactorKind::Multiplicative),
            "одиниці" | "units" | "unit" | "additive" => Ok(FactorKind::Additive),
            _ => Err(ForecastError::UnknownFactorKind(s.to_string())),
        }
    }
}

impl std::fmt::Display for FactorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FactorKind::Multiplicative => write!(f, "multiplicative"),
            FactorKind::Additive => write!(f, "additive"),
        }
    }
}

/// A factor column as read from a factor source, kind still unparsed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFactor {
    pub description: String,
    pub kind: String,
    pub header: String,
    pub values: Vec<Observation>,
}

/// A monthly adjustment attached to the series whose label matches `label`.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorRecord {
    description: String,
    kind: FactorKind,
    label: String,
    values: [Observation; MONTHS_PER_YEAR],
}

impl FactorRecord {
    /// Build a record. Missing trailing months are gaps; extra values are ignored.
    pub fn new(
        label: impl Into<String>,
        kind: FactorKind,
        values: impl IntoIterator<Item = Observation>,
    ) -> Self {
        let mut monthly = [None; MONTHS_PER_YEAR];
        for (slot, value) in monthly.iter_mut().zip(values) {
            *slot = value;
        }
        Self {
            description: String::new(),
            kind,
            label: label.into(),
            values: monthly,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> FactorKind {
        self.kind
    }

    /// Label of the series this factor targets.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[Observation; MONTHS_PER_YEAR] {
        &self.values
    }

    /// Factor value for forecast month slot `m` (0-based).
    pub fn value_at(&self, slot: usize) -> Observation {
        self.values.get(slot).copied().flatten()
    }
}

impl TryFrom<RawFactor> for FactorRecord {
    type Error = ForecastError;

    fn try_from(raw: RawFactor) -> Result<Self> {
        let kind = raw.kind.parse::<FactorKind>()?;
        Ok(FactorRecord::new(raw.header, kind, raw.values)
            .with_description(raw.description.trim()))
    }
}

/// Convert raw factors into records, excluding unrecognized kinds.
pub fn load_factor_records(raw: impl IntoIterator<Item = RawFactor>) -> Vec<FactorRecord> {
    raw.into_iter()
        .filter_map(|factor| {
            let header = factor.header.clone();
            match FactorRecord::try_from(factor) {
                Ok(record) => Some(record),
                Err(err) => {
                    tracing::warn!(factor = %header, error = %err, "skipping factor");
                    None
                }
            }
        })
        .collect()
}

/// Canonical form used to match factor labels against series labels:
/// lowercase with all whitespace removed.
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Group factor records by series, preserving their given order.
///
/// The result has one entry per series (same order as `series`). Records whose
/// label matches no series are dropped.
pub fn associate_factors<'a>(
    series: &[Series],
    factors: &'a [FactorRecord],
) -> Vec<Vec<&'a FactorRecord>> {
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(series.len());
    for (i, s) in series.iter().enumerate() {
        slots.entry(normalize_label(s.label())).or_insert(i);
    }

    let mut grouped = vec![Vec::new(); series.len()];
    for factor in factors {
        match slots.get(&normalize_label(factor.label())) {
            Some(&i) => grouped[i].push(factor),
            None => {
                tracing::debug!(factor = factor.label(), "factor matches no series");
            }
        }
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parses_known_categories() {
        assert_eq!("коефіцієнт".parse::<FactorKind>().unwrap(), FactorKind::Multiplicative);
        assert_eq!(" Coefficient ".parse::<FactorKind>().unwrap(), FactorKind::Multiplicative);
        assert_eq!("одиниці".parse::<FactorKind>().unwrap(), FactorKind::Additive);
        assert_eq!("ADDITIVE".parse::<FactorKind>().unwrap(), FactorKind::Additive);
        assert_eq!(
            "percent".parse::<FactorKind>().unwrap_err(),
            ForecastError::UnknownFactorKind("percent".to_string())
        );
    }

    #[test]
    fn record_pads_and_truncates_to_twelve_months() {
        let short = FactorRecord::new("North", FactorKind::Additive, vec![Some(1.0), None]);
        assert_eq!(short.value_at(0), Some(1.0));
        assert_eq!(short.value_at(1), None);
        assert_eq!(short.value_at(11), None);

        let long = FactorRecord::new("North", FactorKind::Additive, (0..20).map(|i| Some(i as f64)));
        assert_eq!(long.value_at(11), Some(11.0));
        assert_eq!(long.value_at(12), None);
    }

    #[test]
    fn loading_drops_unknown_kinds() {
        let raw = vec![
            RawFactor {
                description: " Temperature ".into(),
                kind: "коефіцієнт".into(),
                header: "North".into(),
                values: vec![Some(1.1); 12],
            },
            RawFactor {
                description: "Promo".into(),
                kind: "percent".into(),
                header: "North".into(),
                values: vec![Some(2.0); 12],
            },
        ];
        let records = load_factor_records(raw);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].description(), "Temperature");
        assert_eq!(records[0].kind(), FactorKind::Multiplicative);
    }

    #[test]
    fn labels_normalize_case_and_whitespace() {
        assert_eq!(normalize_label("  North West "), "northwest");
        assert_eq!(normalize_label("ЗАХІД"), "захід");
    }

    #[test]
    fn association_keeps_order_and_drops_unmatched() {
        let series = vec![
            Series::new(7, "North", vec![]),
            Series::new(8, "South East", vec![]),
        ];
        let factors = vec![
            FactorRecord::new("southeast", FactorKind::Multiplicative, [None; 12]),
            FactorRecord::new("Nowhere", FactorKind::Additive, [None; 12]),
            FactorRecord::new(" SOUTH EAST", FactorKind::Additive, [None; 12]),
        ];
        let grouped = associate_factors(&series, &factors);
        assert!(grouped[0].is_empty());
        let kinds: Vec<FactorKind> = grouped[1].iter().map(|f| f.kind()).collect();
        assert_eq!(kinds, vec![FactorKind::Multiplicative, FactorKind::Additive]);
    }
}
