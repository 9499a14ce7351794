//! File-backed KeyValueStore implementation.

use anyhow::{Context, Result};
use async_trait::async_trait;
use docmint_core::error::DocmintError;
use docmint_core::store::KeyValueStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A key-value store keeping one `<key>.json` file per key under a base
/// directory.
///
/// Writes go through a temporary file followed by a rename, so a
/// crashed write never leaves a half-written value behind.
///
/// ```text
/// base_dir/
/// ├── documents.json
/// └── documents.json.tmp   (transient, during a write)
/// ```
pub struct FileKeyValueStore {
    base_dir: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a store rooted at the given directory, creating it if
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).context("Failed to create store directory")?;
        Ok(Self { base_dir })
    }

    /// Creates a store at the default location
    /// (`<platform data dir>/docmint`).
    ///
    /// # Errors
    ///
    /// Returns an error if the platform data directory cannot be
    /// determined or the store directory cannot be created.
    pub fn default_location() -> Result<Self> {
        let data_dir = dirs::data_dir().context("Failed to get platform data directory")?;
        Self::new(data_dir.join("docmint"))
    }

    /// Returns the file path for a given key.
    fn key_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> docmint_core::Result<Option<String>> {
        let path = self.key_path(key);
        match tokio::fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DocmintError::io(format!(
                "failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> docmint_core::Result<()> {
        let path = self.key_path(key);
        let tmp_path = self.base_dir.join(format!("{}.json.tmp", key));

        tokio::fs::write(&tmp_path, value).await.map_err(|e| {
            DocmintError::io(format!("failed to write {}: {}", tmp_path.display(), e))
        })?;
        tokio::fs::rename(&tmp_path, &path).await.map_err(|e| {
            DocmintError::io(format!("failed to commit {}: {}", path.display(), e))
        })?;

        debug!(key, path = %path.display(), "store entry written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();
        assert_eq!(store.get("documents").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();

        store.set("documents", r#"[{"id":"1"}]"#).await.unwrap();
        assert_eq!(
            store.get("documents").await.unwrap().as_deref(),
            Some(r#"[{"id":"1"}]"#)
        );
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();

        store.set("documents", "[]").await.unwrap();
        store.set("documents", r#"["newer"]"#).await.unwrap();
        assert_eq!(
            store.get("documents").await.unwrap().as_deref(),
            Some(r#"["newer"]"#)
        );
    }

    #[tokio::test]
    async fn test_write_leaves_no_temporary_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileKeyValueStore::new(dir.path()).unwrap();

        store.set("documents", "[]").await.unwrap();
        assert!(dir.path().join("documents.json").exists());
        assert!(!dir.path().join("documents.json.tmp").exists());
    }

    #[tokio::test]
    async fn test_new_creates_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        let store = FileKeyValueStore::new(&nested).unwrap();
        store.set("documents", "[]").await.unwrap();
        assert!(nested.join("documents.json").exists());
    }
}
