//! Monthly time index shared by every series of a dataset.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};

/// Number of calendar months in a seasonal cycle.
pub const MONTHS_PER_YEAR: usize = 12;

/// A single (year, month) observation period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a period. The month must lie in 1..=12.
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=MONTHS_PER_YEAR as u32).contains(&month) {
            return Err(ForecastError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month, 1-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Zero-based month slot for indexing 12-element tables.
    pub fn month_slot(&self) -> usize {
        (self.month - 1) as usize
    }

    /// First day of the period, if the year is representable on the calendar.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    /// Whether the period maps onto a real calendar date.
    pub fn is_calendar_valid(&self) -> bool {
        self.first_day().is_some()
    }
}

impl From<NaiveDate> for Period {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Ordered sequence of periods; position `i` means the same period in every
/// sequence derived from the dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimeIndex {
    periods: Vec<Period>,
}

impl TimeIndex {
    pub fn new(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    /// Consecutive months starting at `(year, month)`.
    pub fn monthly(year: i32, month: u32, len: usize) -> Result<Self> {
        let start = Period::new(year, month)?;
        let periods = (0..len)
            .map(|offset| {
                let slot = start.month_slot() + offset;
                Period {
                    year: start.year + (slot / MONTHS_PER_YEAR) as i32,
                    month: (slot % MONTHS_PER_YEAR) as u32 + 1,
                }
            })
            .collect();
        Ok(Self { periods })
    }

    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    pub fn get(&self, position: usize) -> Option<Period> {
        self.periods.get(position).copied()
    }

    /// Calendar month (1..=12) of every position.
    pub fn months(&self) -> Vec<u32> {
        self.periods.iter().map(Period::month).collect()
    }

    /// Year following the last calendar-valid period.
    pub fn next_year(&self) -> Option<i32> {
        self.periods
            .iter()
            .rev()
            .find(|p| p.is_calendar_valid())
            .map(|p| p.year + 1)
    }

    /// The twelve forecast periods (January..December) of `anchor_year`.
    pub fn forecast_periods(anchor_year: i32) -> Vec<Period> {
        (1..=MONTHS_PER_YEAR as u32)
            .map(|month| Period {
                year: anchor_year,
                month,
            })
            .collect()
    }
}
