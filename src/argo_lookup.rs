//! This module provides the main entry point of the crate: a lookup session
//! that loads Argo profile tables on demand and answers date/position queries
//! against them.

use crate::dataset::loader::DatasetLoader;
use crate::dataset::source::{DatasetSource, FileSource, HttpSource};
use crate::error::ArgoLookupError;
use crate::query::{finite_degree, Query};
use crate::types::dataset::Dataset;
use crate::types::partition::DatasetMode;
use crate::types::search_result::SearchResult;
use crate::types::year::{Year, YearRange};
use crate::utils::{round_degree, table_longitude};
use bon::bon;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// A lookup session over the Argo profile tables.
///
/// The session owns its table cache: every table is fetched at most once for
/// the lifetime of the `ArgoLookup`, and dropped with it. Independent sessions
/// never share cached tables.
///
/// Create one with [`ArgoLookup::from_url`], [`ArgoLookup::from_dir`], or
/// [`ArgoLookup::builder`] for full control.
///
/// # Examples
///
/// ```rust,no_run
/// # use argo_lookup::{ArgoLookup, ArgoLookupError};
/// # async fn run() -> Result<(), ArgoLookupError> {
/// let lookup = ArgoLookup::from_url("https://example.org/argo-lookup/");
/// let result = lookup
///     .search()
///     .year(2024)
///     .month(3)
///     .latitude(10.2)
///     .longitude(-19.8)
///     .call()
///     .await?;
/// println!("{}", result);
/// # Ok(())
/// # }
/// ```
pub struct ArgoLookup {
    loader: DatasetLoader,
    year_range: Option<YearRange>,
}

#[bon]
impl ArgoLookup {
    /// Builds a lookup session.
    ///
    /// # Arguments
    ///
    /// * `.source(Arc<dyn DatasetSource>)`: **Required.** Where tables are fetched from.
    /// * `.mode(DatasetMode)`: Optional. Per-year files or one combined table. Defaults to [`DatasetMode::Partitioned`].
    /// * `.year_range(YearRange)`: Optional. Accepted query years. Defaults to [`YearRange::default`].
    /// * `.check_years(bool)`: Optional. Reject years outside `year_range` before fetching. Defaults to `true`.
    /// * `.timeout(Duration)`: Optional. Per-fetch deadline. No deadline by default.
    #[builder]
    pub fn new(
        source: Arc<dyn DatasetSource>,
        #[builder(default)] mode: DatasetMode,
        year_range: Option<YearRange>,
        #[builder(default = true)] check_years: bool,
        timeout: Option<Duration>,
    ) -> Self {
        let mut loader = DatasetLoader::new(source, mode);
        if let Some(timeout) = timeout {
            loader = loader.with_timeout(timeout);
        }
        let year_range = check_years.then(|| year_range.unwrap_or_default());
        Self { loader, year_range }
    }

    /// A session fetching per-year tables from a static HTTP host.
    pub fn from_url(base_url: impl Into<String>) -> Self {
        Self::builder()
            .source(Arc::new(HttpSource::new(base_url)))
            .build()
    }

    /// A session reading per-year tables from a local directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        Self::builder()
            .source(Arc::new(FileSource::new(dir)))
            .build()
    }

    pub fn mode(&self) -> &DatasetMode {
        self.loader.mode()
    }

    pub fn year_range(&self) -> Option<&YearRange> {
        self.year_range.as_ref()
    }

    pub fn loader(&self) -> &DatasetLoader {
        &self.loader
    }

    /// Loads (or returns the cached) table that serves `year`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgoLookupError::Query`] if `year` is outside the accepted range,
    /// and [`ArgoLookupError::Dataset`] if the table cannot be fetched or parsed.
    pub async fn load_year(&self, year: Year) -> Result<Arc<Dataset>, ArgoLookupError> {
        Query::new(year).validate(self.year_range.as_ref())?;
        let key = self.loader.mode().key_for(year);
        Ok(self.loader.load(key).await?)
    }

    /// Runs a structured query.
    ///
    /// The query is validated first; nothing is fetched for an invalid query.
    /// Hits keep the order of the table.
    ///
    /// # Errors
    ///
    /// Returns [`ArgoLookupError::Query`] for out of range fields, and
    /// [`ArgoLookupError::Dataset`] if the table cannot be fetched or parsed.
    /// An empty result is not an error.
    pub async fn find(&self, query: &Query) -> Result<SearchResult, ArgoLookupError> {
        query.validate(self.year_range.as_ref())?;
        let key = self.loader.mode().key_for(query.year);
        let dataset = self.loader.load(key).await?;
        let hits = dataset.search(query).into_iter().cloned().collect();
        Ok(SearchResult {
            query: *query,
            partition: key,
            hits,
        })
    }

    /// Searches by date and raw position.
    ///
    /// Coordinates are given in decimal degrees and rounded to whole degrees in
    /// the longitude convention of the configured tables before matching.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.year(i32)`: **Required.** Year to search.
    /// * `.month(u32)`: Optional. Month, 1-12.
    /// * `.day(u32)`: Optional. Day of month, 1-31.
    /// * `.latitude(f64)`: Optional. Latitude in decimal degrees.
    /// * `.longitude(f64)`: Optional. Longitude in decimal degrees, either convention.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NonFiniteCoordinate`](crate::QueryError::NonFiniteCoordinate)
    /// for a `NaN` or infinite coordinate, plus everything [`ArgoLookup::find`] returns.
    #[builder]
    pub async fn search(
        &self,
        year: i32,
        month: Option<u32>,
        day: Option<u32>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<SearchResult, ArgoLookupError> {
        let convention = self.loader.mode().longitude_convention();
        let latitude = latitude
            .map(|lat| finite_degree("latitude", lat))
            .transpose()?;
        let longitude = longitude
            .map(|lon| finite_degree("longitude", lon))
            .transpose()?;
        let query = Query {
            year: Year(year),
            month,
            day,
            lat: latitude.map(round_degree),
            lon: longitude.map(|lon| table_longitude(lon, convention)),
        };
        self.find(&query).await
    }
}
