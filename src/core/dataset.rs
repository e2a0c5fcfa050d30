//! Series and dataset containers with source-row loading.

use super::time_index::{Period, TimeIndex};
use crate::error::{ForecastError, Result};

/// A single monthly value; `None` marks a gap (absent source cell).
pub type Observation = Option<f64>;

/// One tracked data column across time.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    column: usize,
    label: String,
    values: Vec<Observation>,
}

impl Series {
    pub fn new(column: usize, label: impl Into<String>, values: Vec<Observation>) -> Self {
        Self {
            column,
            label: label.into(),
            values,
        }
    }

    /// Stable source column index.
    pub fn column(&self) -> usize {
        self.column
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[Observation] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of non-gap values.
    pub fn valid_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }
}

/// In-memory multi-series dataset aligned on one time index.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    index: TimeIndex,
    series: Vec<Series>,
}

impl Dataset {
    /// Create a dataset, checking every series against the index length.
    pub fn new(index: TimeIndex, series: Vec<Series>) -> Result<Self> {
        for s in &series {
            if s.len() != index.len() {
                return Err(ForecastError::DimensionMismatch {
                    expected: index.len(),
                    got: s.len(),
                });
            }
        }
        Ok(Self { index, series })
    }

    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    pub fn index(&self) -> &TimeIndex {
        &self.index
    }

    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Historical period count.
    pub fn period_count(&self) -> usize {
        self.index.len()
    }

    pub fn series_count(&self) -> usize {
        self.series.len()
    }
}

/// One row of a tabular source: year and month cells plus one cell per series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceRow {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub values: Vec<Observation>,
}

impl SourceRow {
    pub fn new(year: Option<i32>, month: Option<u32>, values: Vec<Observation>) -> Self {
        Self {
            year,
            month,
            values,
        }
    }
}

/// Builder that assembles a [`Dataset`] from source rows.
///
/// Rows without a year or a month cell are skipped along with their values.
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    first_column: usize,
    labels: Vec<String>,
    rows: Vec<SourceRow>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source column number of the first series; later series follow consecutively.
    pub fn first_column(mut self, column: usize) -> Self {
        self.first_column = column;
        self
    }

    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn row(mut self, row: SourceRow) -> Self {
        self.rows.push(row);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = SourceRow>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn build(self) -> Result<Dataset> {
        let width = self.labels.len();
        let mut periods = Vec::with_capacity(self.rows.len());
        let mut columns: Vec<Vec<Observation>> = vec![Vec::with_capacity(self.rows.len()); width];

        for row in self.rows {
            let (Some(year), Some(month)) = (row.year, row.month) else {
                continue;
            };
            if row.values.len() != width {
                return Err(ForecastError::DimensionMismatch {
                    expected: width,
                    got: row.values.len(),
                });
            }
            periods.push(Period::new(year, month)?);
            for (column, value) in columns.iter_mut().zip(row.values) {
                column.push(value);
            }
        }

        let series = self
            .labels
            .into_iter()
            .zip(columns)
            .enumerate()
            .map(|(offset, (label, values))| Series::new(self.first_column + offset, label, values))
            .collect();

        Dataset::new(TimeIndex::new(periods), series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_skips_rows_without_period() {
        let dataset = Dataset::builder()
            .first_column(7)
            .labels(["North", "South"])
            .row(SourceRow::new(Some(2023), Some(1), vec![Some(10.0), None]))
            .row(SourceRow::new(None, Some(2), vec![Some(99.0), Some(99.0)]))
            .row(SourceRow::new(Some(2023), None, vec![Some(99.0), Some(99.0)]))
            .row(SourceRow::new(Some(2023), Some(2), vec![Some(12.0), Some(5.0)]))
            .build()
            .unwrap();

        assert_eq!(dataset.period_count(), 2);
        assert_eq!(dataset.series_count(), 2);
        assert_eq!(dataset.series()[0].column(), 7);
        assert_eq!(dataset.series()[1].column(), 8);
        assert_eq!(dataset.series()[0].values(), &[Some(10.0), Some(12.0)]);
        assert_eq!(dataset.series()[1].values(), &[None, Some(5.0)]);
        assert_eq!(dataset.series()[1].valid_count(), 1);
    }

    #[test]
    fn builder_rejects_ragged_rows() {
        let err = Dataset::builder()
            .labels(["A", "B"])
            .row(SourceRow::new(Some(2023), Some(1), vec![Some(1.0)]))
            .build()
            .unwrap_err();
        assert_eq!(err, ForecastError::DimensionMismatch { expected: 2, got: 1 });
    }

    #[test]
    fn builder_rejects_invalid_month() {
        let err = Dataset::builder()
            .labels(["A"])
            .row(SourceRow::new(Some(2023), Some(14), vec![Some(1.0)]))
            .build()
            .unwrap_err();
        assert_eq!(err, ForecastError::InvalidMonth(14));
    }

    #[test]
    fn dataset_checks_series_alignment() {
        let index = TimeIndex::monthly(2023, 1, 3).unwrap();
        let err = Dataset::new(index, vec![Series::new(0, "A", vec![Some(1.0)])]).unwrap_err();
        assert_eq!(err, ForecastError::DimensionMismatch { expected: 3, got: 1 });
    }
}
