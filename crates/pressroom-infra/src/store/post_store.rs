//! Storage-backed post store.
//!
//! The entire collection lives as one JSON array under one storage key; every
//! save and delete is a full read-modify-write of that blob. There is no
//! locking between callers sharing a backend, so two overlapping saves resolve
//! to last-writer-wins. Acceptable for a single operator; a real defect the
//! moment concurrent editing is intended.

use std::sync::Arc;

use async_trait::async_trait;

use pressroom_core::domain::Post;
use pressroom_core::domain::sanitize::strip_bidi;
use pressroom_core::error::StoreError;
use pressroom_core::ports::{PostRepository, StorageBackend};

/// Storage key the post collection is serialized under.
pub const DEFAULT_STORAGE_KEY: &str = "blog_posts";

/// `PostRepository` over any [`StorageBackend`].
pub struct PostStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl PostStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: Arc<dyn StorageBackend>, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Load the raw collection. Fails soft: a missing key, an unreadable
    /// backend, or corrupt JSON all come back as an empty collection with a
    /// warning logged, never as an error.
    async fn load(&self) -> Vec<Post> {
        let raw = match self.backend.read(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Storage read failed, treating post collection as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Corrupt post collection, treating as empty");
                Vec::new()
            }
        }
    }

    /// Re-serialize and write the entire collection as one backend write.
    async fn persist(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw =
            serde_json::to_string(posts).map_err(|e| StoreError::Serialization(e.to_string()))?;
        self.backend
            .write(&self.key, &raw)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

#[async_trait]
impl PostRepository for PostStore {
    async fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.load().await;
        for post in &mut posts {
            post.content = strip_bidi(&post.content);
        }
        Ok(posts)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError> {
        Ok(self
            .list_all()
            .await?
            .into_iter()
            .find(|p| p.id.as_deref() == Some(id)))
    }

    async fn save(&self, mut post: Post) -> Result<Post, StoreError> {
        post.content = strip_bidi(&post.content);
        post.normalize_social_media();
        if post.id.is_none() {
            post.id = Some(Post::generate_id());
        }
        post.touch();

        let mut posts = self.load().await;
        match posts.iter().position(|p| p.id == post.id) {
            Some(index) => posts[index] = post.clone(),
            None => posts.push(post.clone()),
        }
        self.persist(&posts).await?;

        tracing::debug!(post_id = ?post.id, collection_len = posts.len(), "Post saved");
        Ok(post)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut posts = self.load().await;
        posts.retain(|p| p.id.as_deref() != Some(id));
        self.persist(&posts).await
    }
}
