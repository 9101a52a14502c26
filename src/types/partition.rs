//! Defines how the lookup tables are split into files and which file a
//! given year is served from.

use crate::types::year::Year;
use std::fmt;

/// Default name of the single combined table.
pub const DEFAULT_COMBINED_RESOURCE: &str = "search_table.json";

/// Identifies one lookup table file and the cache slot it is stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartitionKey {
    /// One file per year, named `<year>.json`.
    Year(Year),
    /// The single unpartitioned table holding every year.
    Combined,
}

impl PartitionKey {
    /// Whether rows loaded under this key must still be checked against the query year.
    pub fn is_combined(&self) -> bool {
        matches!(self, PartitionKey::Combined)
    }
}

impl fmt::Display for PartitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartitionKey::Year(year) => write!(f, "{}", year),
            PartitionKey::Combined => write!(f, "combined"),
        }
    }
}

/// Longitude convention used by the producer when rounding.
///
/// The per-year tables store longitudes in `[0, 360)`, the combined table keeps
/// the signed `[-180, 180]` values of the GDAC index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LongitudeConvention {
    Signed,
    ZeroTo360,
}

/// How the tables are laid out on the host.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DatasetMode {
    /// One `<year>.json` file per year.
    #[default]
    Partitioned,
    /// One file containing every year, loaded once.
    Combined { resource: String },
}

impl DatasetMode {
    pub fn combined() -> Self {
        DatasetMode::Combined {
            resource: DEFAULT_COMBINED_RESOURCE.to_string(),
        }
    }

    pub(crate) fn key_for(&self, year: Year) -> PartitionKey {
        match self {
            DatasetMode::Partitioned => PartitionKey::Year(year),
            DatasetMode::Combined { .. } => PartitionKey::Combined,
        }
    }

    /// File name the given key is fetched from.
    pub(crate) fn resource_name(&self, key: PartitionKey) -> String {
        match (self, key) {
            (_, PartitionKey::Year(year)) => format!("{}.json", year),
            (DatasetMode::Combined { resource }, PartitionKey::Combined) => resource.clone(),
            (DatasetMode::Partitioned, PartitionKey::Combined) => {
                DEFAULT_COMBINED_RESOURCE.to_string()
            }
        }
    }

    pub fn longitude_convention(&self) -> LongitudeConvention {
        match self {
            DatasetMode::Partitioned => LongitudeConvention::ZeroTo360,
            DatasetMode::Combined { .. } => LongitudeConvention::Signed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_names() {
        let partitioned = DatasetMode::Partitioned;
        assert_eq!(
            partitioned.resource_name(PartitionKey::Year(Year(2024))),
            "2024.json"
        );

        let combined = DatasetMode::combined();
        assert_eq!(
            combined.resource_name(PartitionKey::Combined),
            "search_table.json"
        );

        let custom = DatasetMode::Combined {
            resource: "search_table_sample.json".to_string(),
        };
        assert_eq!(
            custom.resource_name(PartitionKey::Combined),
            "search_table_sample.json"
        );
    }

    #[test]
    fn test_key_for_year() {
        assert_eq!(
            DatasetMode::Partitioned.key_for(Year(2001)),
            PartitionKey::Year(Year(2001))
        );
        assert_eq!(
            DatasetMode::combined().key_for(Year(2001)),
            PartitionKey::Combined
        );
        assert!(PartitionKey::Combined.is_combined());
        assert!(!PartitionKey::Year(Year(2001)).is_combined());
    }
}
