//! In-memory storage backend - used in tests and when no data directory is
//! configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use pressroom_core::ports::{StorageBackend, StorageError};

/// In-memory storage using a simple HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryStorage {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageBackend for InMemoryStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_and_read() {
        let storage = InMemoryStorage::new();
        storage.write("key1", "value1").await.unwrap();
        assert_eq!(
            storage.read("key1").await.unwrap(),
            Some("value1".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_key_reads_none() {
        let storage = InMemoryStorage::new();
        assert_eq!(storage.read("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let storage = InMemoryStorage::new();
        storage.write("key1", "value1").await.unwrap();
        storage.remove("key1").await.unwrap();
        storage.remove("key1").await.unwrap();
        assert_eq!(storage.read("key1").await.unwrap(), None);
    }
}
