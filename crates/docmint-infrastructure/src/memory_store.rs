//! In-memory KeyValueStore implementation.

use async_trait::async_trait;
use docmint_core::Result;
use docmint_core::store::KeyValueStore;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// A process-local key-value store backed by a map.
///
/// Useful for tests and for embedders that have no filesystem access
/// and bridge persistence elsewhere.
#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_round_trip_and_overwrite() {
        let store = MemoryKeyValueStore::new();
        assert_eq!(store.get("documents").await.unwrap(), None);

        store.set("documents", "[]").await.unwrap();
        assert_eq!(store.get("documents").await.unwrap().as_deref(), Some("[]"));

        store.set("documents", r#"["x"]"#).await.unwrap();
        assert_eq!(
            store.get("documents").await.unwrap().as_deref(),
            Some(r#"["x"]"#)
        );
    }
}
