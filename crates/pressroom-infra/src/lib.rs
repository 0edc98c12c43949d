//! # Pressroom Infrastructure
//!
//! Concrete implementations of the ports defined in `pressroom-core`:
//! storage backends, the storage-backed post store, and the mock services
//! standing in for backends that do not exist yet.

pub mod auth;
pub mod directory;
pub mod storage;
pub mod store;

pub use auth::MockAuthService;
pub use directory::{InMemoryEditorDirectory, InMemorySubscriberDirectory};
pub use storage::{InMemoryStorage, JsonFileStorage};
pub use store::{DEFAULT_STORAGE_KEY, PostStore};
