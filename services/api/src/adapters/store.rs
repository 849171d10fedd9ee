//! services/api/src/adapters/store.rs
//!
//! This module contains the storage adapter, the concrete implementation of
//! the `StorageService` port from the `core` crate. Each key is kept as a
//! standalone JSON document inside the configured data directory, standing in
//! for the browser-local storage of the original front-end.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use stellar_voyage_core::ports::{PortError, PortResult, StorageService};
use tracing::warn;

/// A file-backed adapter that implements the `StorageService` port.
#[derive(Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Creates a new `JsonFileStore` rooted at `root`. The directory is
    /// created lazily on the first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn document_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StorageService for JsonFileStore {
    async fn save(&self, key: &str, value: serde_json::Value) -> PortResult<()> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        let body = serde_json::to_vec_pretty(&value)
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        tokio::fs::write(self.document_path(key), body)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))
    }

    async fn load(&self, key: &str) -> PortResult<Option<serde_json::Value>> {
        let path = self.document_path(key);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PortError::Unexpected(e.to_string())),
        };
        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                // Corrupt documents degrade to "no saved data" so the caller
                // can fall back to its built-in seed.
                warn!(key, error = %e, "Ignoring unreadable stored document");
                Ok(None)
            }
        }
    }
}

/// Convenience accessor for tests and tooling.
impl JsonFileStore {
    pub fn root(&self) -> &Path {
        &self.root
    }
}
