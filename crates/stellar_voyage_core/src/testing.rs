//! crates/stellar_voyage_core/src/testing.rs
//!
//! In-memory port implementations shared by the unit tests of this crate
//! and the service crate.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{PortError, PortResult, StorageService};

/// A `StorageService` backed by an in-process map.
#[derive(Default)]
pub struct MemoryStore {
    documents: Mutex<HashMap<String, serde_json::Value>>,
}

#[async_trait]
impl StorageService for MemoryStore {
    async fn save(&self, key: &str, value: serde_json::Value) -> PortResult<()> {
        self.documents
            .lock()
            .map_err(|e| PortError::Unexpected(e.to_string()))?
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn load(&self, key: &str) -> PortResult<Option<serde_json::Value>> {
        let documents = self
            .documents
            .lock()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        Ok(documents.get(key).cloned())
    }
}
