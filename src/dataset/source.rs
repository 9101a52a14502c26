use crate::dataset::error::DatasetError;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, warn};
use reqwest::Client;
use std::io;
use std::path::{Path, PathBuf};
use tokio::io::AsyncReadExt;
use tokio_util::io::StreamReader;

/// Anything that can hand out the raw bytes of a named lookup table.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Fetches the full body of `resource` (e.g. `"2024.json"`).
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>, DatasetError>;

    /// Human readable location of `resource`, used in log lines.
    fn locate(&self, resource: &str) -> String;
}

/// Fetches tables over HTTP from a static file host.
#[derive(Debug, Clone)]
pub struct HttpSource {
    base_url: String,
    client: Client,
}

impl HttpSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>, DatasetError> {
        let url = self.locate(resource);
        debug!("Downloading lookup table from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| DatasetError::NetworkRequest(url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(match e.status() {
                    Some(status) => DatasetError::ResourceNotFound {
                        resource: url,
                        status,
                    },
                    None => DatasetError::NetworkRequest(url, e),
                });
            }
        };

        let stream = response.bytes_stream().map_err(io::Error::other);
        let mut reader = StreamReader::new(stream);
        let mut body = Vec::new();
        reader
            .read_to_end(&mut body)
            .await
            .map_err(|e| DatasetError::DownloadIo(url, e))?;
        Ok(body)
    }

    fn locate(&self, resource: &str) -> String {
        format!("{}{}", self.base_url, resource)
    }
}

/// Reads tables from a local directory, e.g. the producer's `docs/` output.
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self, resource: &str) -> Result<Vec<u8>, DatasetError> {
        let path = self.dir.join(resource);
        debug!("Reading lookup table from {}", path.display());
        tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                DatasetError::FileNotFound(path.clone())
            } else {
                DatasetError::FileRead(path.clone(), e)
            }
        })
    }

    fn locate(&self, resource: &str) -> String {
        self.dir.join(resource).display().to_string()
    }
}
