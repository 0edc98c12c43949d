//! The post store - storage-backed implementation of `PostRepository`.

mod post_store;

pub use post_store::{DEFAULT_STORAGE_KEY, PostStore};
