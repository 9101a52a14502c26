use crate::dataset::error::DatasetError;
use crate::query::error::QueryError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArgoLookupError {
    /// Shared by every caller that waited on the same table transfer.
    #[error(transparent)]
    Dataset(#[from] Arc<DatasetError>),

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ArgoLookupError {
    /// The table for the query could not be obtained (missing, unreachable or timed out).
    pub fn is_not_found(&self) -> bool {
        matches!(self, ArgoLookupError::Dataset(e) if e.is_not_found())
    }

    /// The table was obtained but its contents could not be decoded.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, ArgoLookupError::Dataset(e) if e.is_parse_error())
    }

    /// The query was rejected before anything was fetched.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, ArgoLookupError::Query(_))
    }
}
