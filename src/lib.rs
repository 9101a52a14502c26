mod argo_lookup;
mod dataset;
mod error;
mod filtering;
mod query;
mod types;
mod utils;

pub use argo_lookup::ArgoLookup;
pub use error::ArgoLookupError;

pub use dataset::error::DatasetError;
pub use dataset::loader::DatasetLoader;
pub use dataset::source::{DatasetSource, FileSource, HttpSource};

pub use filtering::{row_matches, RowFilterExt};
pub use query::error::QueryError;
pub use query::Query;

pub use types::dataset::Dataset;
pub use types::partition::{
    DatasetMode, LongitudeConvention, PartitionKey, DEFAULT_COMBINED_RESOURCE,
};
pub use types::row::{DateParts, Row, DAC_BASE_URL};
pub use types::search_result::SearchResult;
pub use types::year::{Year, YearRange, FIRST_ARGO_YEAR};

pub use utils::{normalize_longitude, round_degree, table_longitude};
