//! Admin-facing error type, aggregating the lower layers.

use thiserror::Error;

use pressroom_core::error::{DirectoryError, StoreError};
use pressroom_core::ports::AuthError;

#[derive(Debug, Error)]
pub enum AdminError {
    /// Caller-side validation failure, surfaced to the operator before any
    /// store mutation is attempted.
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Post not found: {id}")]
    PostNotFound { id: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

/// Result type alias for admin services.
pub type AdminResult<T> = Result<T, AdminError>;
