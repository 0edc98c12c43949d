//! File-backed storage - one JSON file per key under a data directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use pressroom_core::ports::{StorageBackend, StorageError};

/// Persistent key-value storage where each key maps to `<dir>/<key>.json`.
///
/// Writes replace the whole file through a temp-file rename, so a crashed
/// write leaves the previous value intact rather than a truncated one. This
/// matches the store's contract: a save either completes fully or fails
/// outright.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl StorageBackend for JsonFileStorage {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "Storage file written");
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_read_remove() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        storage.write("posts", "[]").await.unwrap();
        assert_eq!(storage.read("posts").await.unwrap(), Some("[]".to_string()));

        storage.remove("posts").await.unwrap();
        assert_eq!(storage.read("posts").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_directory_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("never-created"));
        assert_eq!(storage.read("posts").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());

        storage.write("posts", "old").await.unwrap();
        storage.write("posts", "new").await.unwrap();
        assert_eq!(storage.read("posts").await.unwrap(), Some("new".to_string()));
    }

    #[tokio::test]
    async fn test_remove_missing_key_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path());
        storage.remove("never-written").await.unwrap();
    }
}
