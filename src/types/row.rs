//! Defines the record type stored in the lookup tables: one Argo profile file
//! together with its observation date and rounded position.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Base URL of the Argo GDAC `dac/` tree. A row's `file` is relative to it.
pub const DAC_BASE_URL: &str = "https://data-argo.ifremer.fr/dac/";

/// A single entry of a lookup table.
///
/// This mirrors the JSON records written by the table producer, e.g.
///
/// ```json
/// { "file": "aoml/13857/profiles/R13857_001.nc", "YYYYMMDD": 19970729, "lat_round": 0, "lon_round": 344 }
/// ```
///
/// Fields the producer may add later are ignored when deserializing.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Row {
    /// Path of the profile file relative to [`DAC_BASE_URL`].
    pub file: String,
    /// Observation date encoded as `year * 10000 + month * 100 + day`.
    #[serde(rename = "YYYYMMDD")]
    pub yyyymmdd: i32,
    /// Latitude rounded to the nearest whole degree.
    pub lat_round: i32,
    /// Longitude rounded to the nearest whole degree, in the producer's convention.
    pub lon_round: i32,
}

/// The year, month and day packed into a row's `YYYYMMDD` value.
///
/// Obtained by truncating integer division, so malformed values still decompose
/// without error (e.g. a month of `13` is reported as `13`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl DateParts {
    pub fn from_yyyymmdd(value: i32) -> Self {
        Self {
            year: value / 10_000,
            month: ((value % 10_000) / 100) as u32,
            day: (value % 100) as u32,
        }
    }
}

impl Row {
    pub fn date_parts(&self) -> DateParts {
        DateParts::from_yyyymmdd(self.yyyymmdd)
    }

    /// The observation date, if `YYYYMMDD` encodes a real calendar day.
    pub fn date(&self) -> Option<NaiveDate> {
        let parts = self.date_parts();
        NaiveDate::from_ymd_opt(parts.year, parts.month, parts.day)
    }

    /// Canonical download link for this profile file.
    ///
    /// # Examples
    ///
    /// ```
    /// use argo_lookup::Row;
    ///
    /// let row = Row {
    ///     file: "aoml/13857/profiles/R13857_001.nc".to_string(),
    ///     yyyymmdd: 19970729,
    ///     lat_round: 0,
    ///     lon_round: -16,
    /// };
    /// assert_eq!(
    ///     row.url(),
    ///     "https://data-argo.ifremer.fr/dac/aoml/13857/profiles/R13857_001.nc"
    /// );
    /// ```
    pub fn url(&self) -> String {
        format!("{}{}", DAC_BASE_URL, self.file)
    }
}
