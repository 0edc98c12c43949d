use async_trait::async_trait;

use crate::domain::Post;
use crate::error::StoreError;

/// Post repository - the persisted post collection.
///
/// The contract mirrors a single-operator content store: upsert keyed by id,
/// whole-collection reads, soft failure on unreadable data. There is no
/// isolation between concurrent callers; two overlapping saves resolve to
/// last-writer-wins.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// The full collection in storage order (insertion order, not display
    /// order - callers sort). Unreadable or missing persisted data yields an
    /// empty collection, never an error. Returned `content` is always free of
    /// bidi control characters.
    async fn list_all(&self) -> Result<Vec<Post>, StoreError>;

    /// First record whose id matches, or `None`. If duplicate ids ever made
    /// it into storage, the first match silently wins.
    async fn find_by_id(&self, id: &str) -> Result<Option<Post>, StoreError>;

    /// Upsert. Sanitizes content, normalizes the social-media block, assigns
    /// an id when absent, stamps timestamps, then rewrites the whole
    /// collection in one write. Returns the record as persisted.
    async fn save(&self, post: Post) -> Result<Post, StoreError>;

    /// Remove the matching record and persist. No-op when nothing matches.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;
}
