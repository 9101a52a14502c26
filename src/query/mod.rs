//! The structured lookup request and its validation.

pub mod error;

use crate::query::error::QueryError;
use crate::types::year::{Year, YearRange};

/// What to look for in a lookup table.
///
/// Only the year is required. Every other field narrows the match when set.
/// Coordinates are whole degrees, already rounded by the caller (see
/// [`round_degree`](crate::round_degree)).
///
/// # Examples
///
/// ```
/// use argo_lookup::{Query, Year};
///
/// let query = Query::new(Year(2024)).month(3).day(15).lat(10).lon(340);
/// assert_eq!(query.month, Some(3));
/// assert!(query.validate(None).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Query {
    pub year: Year,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub lat: Option<i32>,
    pub lon: Option<i32>,
}

impl Query {
    pub fn new(year: Year) -> Self {
        Self {
            year,
            month: None,
            day: None,
            lat: None,
            lon: None,
        }
    }

    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn day(mut self, day: u32) -> Self {
        self.day = Some(day);
        self
    }

    pub fn lat(mut self, lat: i32) -> Self {
        self.lat = Some(lat);
        self
    }

    pub fn lon(mut self, lon: i32) -> Self {
        self.lon = Some(lon);
        self
    }

    /// Checks field ranges, and the year against `year_range` when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::YearOutOfRange`], [`QueryError::MonthOutOfRange`]
    /// or [`QueryError::DayOutOfRange`] for the first offending field.
    pub fn validate(&self, year_range: Option<&YearRange>) -> Result<(), QueryError> {
        if let Some(range) = year_range {
            if !range.contains(self.year) {
                return Err(QueryError::YearOutOfRange {
                    year: self.year,
                    range: *range,
                });
            }
        }
        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                return Err(QueryError::MonthOutOfRange(month));
            }
        }
        if let Some(day) = self.day {
            if !(1..=31).contains(&day) {
                return Err(QueryError::DayOutOfRange(day));
            }
        }
        Ok(())
    }
}

/// Passes `value` through if it can be rounded to a whole degree.
pub(crate) fn finite_degree(name: &'static str, value: f64) -> Result<f64, QueryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(QueryError::NonFiniteCoordinate(name))
    }
}
