//! Domain-level error types.

use thiserror::Error;

/// Store-level errors.
///
/// Read-side corruption is deliberately NOT represented here: the post store
/// recovers from unreadable persisted data by treating it as an empty
/// collection, so only write-path failures surface as errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage backend failed: {0}")]
    Backend(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

/// Directory-level errors (editor and subscriber registries).
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Entry not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}
