use crate::dataset::decode::decode_rows;
use crate::dataset::error::DatasetError;
use crate::dataset::source::DatasetSource;
use crate::types::dataset::Dataset;
use crate::types::partition::{DatasetMode, PartitionKey};
use futures_util::future::{BoxFuture, FutureExt, Shared};
use log::{info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub type LoadResult = Result<Arc<Dataset>, Arc<DatasetError>>;

type Flight = Shared<BoxFuture<'static, LoadResult>>;

#[derive(Default)]
struct LoaderState {
    loaded: HashMap<PartitionKey, Arc<Dataset>>,
    in_flight: HashMap<PartitionKey, Flight>,
}

/// Loads lookup tables on demand and keeps them for the lifetime of the loader.
///
/// Each key has at most one transfer in flight. Every caller that asks for a
/// key while its transfer runs shares that transfer's outcome, success or
/// failure. Successful datasets are kept; a failure is dropped as soon as the
/// transfer ends, so the next call for that key fetches again.
pub struct DatasetLoader {
    source: Arc<dyn DatasetSource>,
    mode: DatasetMode,
    timeout: Option<Duration>,
    state: Arc<Mutex<LoaderState>>,
}

impl DatasetLoader {
    pub fn new(source: Arc<dyn DatasetSource>, mode: DatasetMode) -> Self {
        Self {
            source,
            mode,
            timeout: None,
            state: Arc::new(Mutex::new(LoaderState::default())),
        }
    }

    /// Gives up on a single fetch after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn mode(&self) -> &DatasetMode {
        &self.mode
    }

    /// Returns the dataset for `key`, fetching it if it is not cached yet.
    ///
    /// The error is shared between all callers that joined the same transfer.
    pub async fn load(&self, key: PartitionKey) -> LoadResult {
        let flight = {
            let mut state = self.state.lock().await;
            if let Some(dataset) = state.loaded.get(&key) {
                info!("Cache hit for lookup table {}", key);
                return Ok(dataset.clone());
            }
            state
                .in_flight
                .entry(key)
                .or_insert_with(|| self.start_flight(key))
                .clone()
        };
        flight.await
    }

    pub async fn is_cached(&self, key: PartitionKey) -> bool {
        self.state.lock().await.loaded.contains_key(&key)
    }

    /// Keys whose datasets are loaded, in no particular order.
    pub async fn cached_keys(&self) -> Vec<PartitionKey> {
        self.state.lock().await.loaded.keys().copied().collect()
    }

    #[cfg(test)]
    async fn in_flight_count(&self) -> usize {
        self.state.lock().await.in_flight.len()
    }

    /// Builds the shared transfer for `key`. It settles the loader state itself
    /// when it finishes, so the outcome is recorded once however many callers await it.
    fn start_flight(&self, key: PartitionKey) -> Flight {
        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let resource = self.mode.resource_name(key);
        let timeout = self.timeout;

        async move {
            let outcome = fetch_dataset(source.as_ref(), key, &resource, timeout)
                .await
                .map_err(Arc::new);

            let mut state = state.lock().await;
            state.in_flight.remove(&key);
            match &outcome {
                Ok(dataset) => {
                    state.loaded.insert(key, dataset.clone());
                }
                Err(e) => warn!("Loading lookup table {} failed: {}", key, e),
            }
            outcome
        }
        .boxed()
        .shared()
    }
}

async fn fetch_dataset(
    source: &dyn DatasetSource,
    key: PartitionKey,
    resource: &str,
    timeout: Option<Duration>,
) -> Result<Arc<Dataset>, DatasetError> {
    let body = match timeout {
        Some(after) => tokio::time::timeout(after, source.fetch(resource))
            .await
            .map_err(|_| DatasetError::Timeout {
                resource: source.locate(resource),
                after,
            })??,
        None => source.fetch(resource).await?,
    };

    let rows = decode_rows(resource, body).await?;
    info!(
        "Loaded {} rows for {} from {}",
        rows.len(),
        key,
        source.locate(resource)
    );
    Ok(Arc::new(Dataset::new(key, rows)))
}
