use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tally::endpoint::Endpoint;
use tally::serde_json::{self, Value};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Dataset {0} not found")]
    NotFound(Endpoint),
    #[error("Dataset {endpoint} is not valid JSON: {source}")]
    Malformed {
        endpoint: Endpoint,
        source: serde_json::Error,
    },
    #[error("Failed to read datasets: {0}")]
    Io(#[from] std::io::Error),
}

/// A read-only source of mock datasets.
///
/// Implementations hand back the stored JSON untouched; the backend never
/// reshapes a payload on its way to the client.
///
/// # Examples
///
/// ```rust,ignore
/// use tally::serde_json::Value;
///
/// use crate::services::{DatasetStore, StoreError};
///
/// async fn total_rows<S: DatasetStore>(store: &S) -> Result<usize, StoreError> {
///     let mut rows = 0;
///     for endpoint in store.list().await? {
///         if let Value::Array(items) = store.get(&endpoint).await? {
///             rows += items.len();
///         }
///     }
///     Ok(rows)
/// }
/// ```
#[async_trait]
pub trait DatasetStore: Send + Sync {
    /// Returns the payload stored for `endpoint`.
    ///
    /// # Errors
    ///
    /// [`StoreError::NotFound`] if there is no such dataset,
    /// [`StoreError::Malformed`] if it is not valid JSON.
    async fn get(&self, endpoint: &Endpoint) -> Result<Value, StoreError>;

    /// Lists the available datasets, sorted by name.
    async fn list(&self) -> Result<Vec<Endpoint>, StoreError>;
}

/// Serves `{root}/{endpoint}.json` files from disk.
pub struct FsDatasetStore {
    root: PathBuf,
}

impl FsDatasetStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl DatasetStore for FsDatasetStore {
    async fn get(&self, endpoint: &Endpoint) -> Result<Value, StoreError> {
        let bytes = match tokio::fs::read(self.root.join(endpoint.file_name())).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(endpoint.clone()));
            }
            Err(err) => return Err(err.into()),
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
            endpoint: endpoint.clone(),
            source,
        })
    }

    async fn list(&self) -> Result<Vec<Endpoint>, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut endpoints = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let file_name = entry.file_name();
            let Some(file_name) = file_name.to_str() else {
                continue;
            };
            if !file_name.ends_with(".json") {
                continue;
            }
            if let Ok(endpoint) = Endpoint::from_file_name(file_name) {
                endpoints.push(endpoint);
            }
        }
        endpoints.sort_by(|a, b| a.as_str().cmp(b.as_str()));

        Ok(endpoints)
    }
}
