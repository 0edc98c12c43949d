use async_trait::async_trait;

/// Key-value storage backend - abstraction over where the serialized post
/// collection lives (in-memory map for tests, a file on disk in production).
///
/// Values are opaque strings; the post store serializes the whole collection
/// into one value under one key, so every write replaces the full blob.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under `key`, or `None` if the key was never
    /// written.
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write `value` under `key`, replacing any previous value.
    async fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Storage backend errors.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O failed: {0}")]
    Io(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
