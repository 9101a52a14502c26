use crate::types::partition::PartitionKey;
use crate::types::row::Row;

/// The rows of one lookup table, in the order the producer wrote them.
///
/// A dataset is immutable once loaded and is shared between callers as
/// `Arc<Dataset>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    key: PartitionKey,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(key: PartitionKey, rows: Vec<Row>) -> Self {
        Self { key, rows }
    }

    pub fn key(&self) -> PartitionKey {
        self.key
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
