use chrono::{Datelike, Utc};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// First year covered by the Argo GDAC profile index.
pub const FIRST_ARGO_YEAR: i32 = 1997;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Hash)]
pub struct Year(pub i32);
impl Year {
    pub fn get(self) -> i32 {
        self.0
    }
}

impl Display for Year {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl From<i32> for Year {
    fn from(value: i32) -> Self {
        Year(value)
    }
}

/// Inclusive range of years a lookup accepts.
///
/// The default starts at [`FIRST_ARGO_YEAR`] and ends at the current UTC year,
/// since the producer publishes one file per year that has profiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub start: Year,
    pub end: Year,
}

impl YearRange {
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start: Year(start.min(end)),
            end: Year(start.max(end)),
        }
    }

    pub fn contains(&self, year: Year) -> bool {
        self.start <= year && year <= self.end
    }

    pub fn as_range(&self) -> RangeInclusive<i32> {
        self.start.get()..=self.end.get()
    }
}

impl Default for YearRange {
    fn default() -> Self {
        Self::new(FIRST_ARGO_YEAR, Utc::now().year())
    }
}

impl Display for YearRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
