use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Lookup table '{resource}' not found (status {status})")]
    ResourceNotFound {
        resource: String,
        status: reqwest::StatusCode,
    },

    #[error("Lookup table file '{0}' does not exist")]
    FileNotFound(PathBuf),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("Download of '{0}' was interrupted")]
    DownloadIo(String, #[source] std::io::Error),

    #[error("Failed to read lookup table file '{0}'")]
    FileRead(PathBuf, #[source] std::io::Error),

    #[error("Failed to decompress gzip payload of '{0}'")]
    Decompress(String, #[source] std::io::Error),

    #[error("Failed to parse lookup table '{resource}'")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Fetching '{resource}' did not finish within {after:?}")]
    Timeout { resource: String, after: Duration },

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}

impl DatasetError {
    /// True for every failure that means the table could not be obtained,
    /// as opposed to a table that was obtained but could not be parsed.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DatasetError::ResourceNotFound { .. }
                | DatasetError::FileNotFound(_)
                | DatasetError::NetworkRequest(..)
                | DatasetError::DownloadIo(..)
                | DatasetError::FileRead(..)
                | DatasetError::Timeout { .. }
        )
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            DatasetError::Parse { .. } | DatasetError::Decompress(..)
        )
    }
}
