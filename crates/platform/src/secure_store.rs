//! Secure Key-Value Storage
//!
//! The durable storage the session layer writes through. On a real
//! device this maps onto the OS keystore (Keychain / Keystore), which
//! encrypts values at rest; the implementations here provide the same
//! contract for host builds and tests.
//!
//! Keys are flat strings. Values are opaque strings; callers decide
//! the serialization.

use std::collections::HashMap;
use std::path::PathBuf;

use tokio::sync::Mutex;

/// Error raised by a secure store implementation
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored data could not be decoded: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Durable key-value storage contract
///
/// All operations address a single key. Absence of a key is a normal
/// state, not an error.
#[trait_variant::make(SecureStore: Send)]
pub trait LocalSecureStore {
    /// Write `value` under `key`, overwriting any prior value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read the value under `key`, or `None` if absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Delete `key`. Deleting an absent key is a no-op.
    async fn delete_item(&self, key: &str) -> Result<(), StoreError>;
}

// ============================================================================
// File-backed store
// ============================================================================

/// File-backed store: a single JSON object on disk
///
/// Writes go through a temp file + rename so a crash mid-write leaves
/// the previous snapshot intact. A corrupt snapshot fails reads with
/// [`StoreError::Encoding`]; writers start over from an empty map so
/// the store heals on the next write.
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<HashMap<String, String>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load for writing: a corrupt snapshot is dropped, not propagated.
    async fn load_for_write(&self) -> Result<HashMap<String, String>, StoreError> {
        match self.load().await {
            Ok(map) => Ok(map),
            Err(StoreError::Encoding(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e,
                    "Discarding corrupt store snapshot");
                Ok(HashMap::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn persist(&self, map: &HashMap<String, String>) -> Result<(), StoreError> {
        let bytes = serde_json::to_vec_pretty(map)?;
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

impl SecureStore for FileStore {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut map = self.load_for_write().await?;
        map.insert(key.to_string(), value.to_string());
        self.persist(&map).await
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let _guard = self.lock.lock().await;
        Ok(self.load().await?.get(key).cloned())
    }

    async fn delete_item(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut map = self.load_for_write().await?;
        if map.remove(key).is_some() {
            self.persist(&map).await?;
        }
        Ok(())
    }
}

// ============================================================================
// In-memory store
// ============================================================================

/// In-memory store for tests and ephemeral host runs
#[derive(Default)]
pub struct MemoryStore {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SecureStore for MemoryStore {
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.map
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.map.lock().await.get(key).cloned())
    }

    async fn delete_item(&self, key: &str) -> Result<(), StoreError> {
        self.map.lock().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{FileStore, MemoryStore, SecureStore, StoreError};

    #[tokio::test]
    async fn test_memory_store_roundtrip() {
        let store = MemoryStore::new();
        assert_eq!(store.get_item("k").await.unwrap(), None);

        store.set_item("k", "v1").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), Some("v1".into()));

        store.set_item("k", "v2").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), Some("v2".into()));

        store.delete_item("k").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_delete_absent_is_noop() {
        let store = MemoryStore::new();
        store.delete_item("never-set").await.unwrap();
    }

    #[tokio::test]
    async fn test_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("vault.json"));

        store.set_item("session", "{\"username\":\"dave\"}").await.unwrap();
        store.set_item("other", "x").await.unwrap();

        assert_eq!(
            store.get_item("session").await.unwrap(),
            Some("{\"username\":\"dave\"}".to_string())
        );

        store.delete_item("session").await.unwrap();
        assert_eq!(store.get_item("session").await.unwrap(), None);
        // Unrelated keys survive
        assert_eq!(store.get_item("other").await.unwrap(), Some("x".into()));
    }

    #[tokio::test]
    async fn test_file_store_survives_process_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.json");

        FileStore::new(&path).set_item("k", "v").await.unwrap();

        // A fresh instance sees the persisted value
        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get_item("k").await.unwrap(), Some("v".into()));
    }

    #[tokio::test]
    async fn test_file_store_corrupt_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vault.json");
        tokio::fs::write(&path, b"{ not json").await.unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get_item("k").await,
            Err(StoreError::Encoding(_))
        ));

        // A write heals the snapshot
        store.set_item("k", "v").await.unwrap();
        assert_eq!(store.get_item("k").await.unwrap(), Some("v".into()));
    }
}
