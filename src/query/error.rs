use crate::types::year::{Year, YearRange};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Year {year} is outside the supported range {range}")]
    YearOutOfRange { year: Year, range: YearRange },

    #[error("Month {0} is not between 1 and 12")]
    MonthOutOfRange(u32),

    #[error("Day {0} is not between 1 and 31")]
    DayOutOfRange(u32),

    #[error("The {0} is not a finite number")]
    NonFiniteCoordinate(&'static str),
}
