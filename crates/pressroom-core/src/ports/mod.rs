//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod directory;
mod repository;
mod storage;

pub use auth::{AuthError, AuthService, Session};
pub use directory::{EditorDirectory, NewEditor, SubscriberDirectory};
pub use repository::PostRepository;
pub use storage::{StorageBackend, StorageError};
