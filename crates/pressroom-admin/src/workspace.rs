//! Editor workspace - the service behind the post-editor surface.
//!
//! Loads a post by id (or a blank draft), and writes drafts back through the
//! repository after validating. The store itself never validates; a consumer
//! that bypasses this service can persist an empty-title record, which is why
//! all editing flows go through here.

use std::sync::Arc;

use pressroom_core::domain::{Post, PostStatus};
use pressroom_core::ports::PostRepository;

use crate::error::{AdminError, AdminResult};

pub struct EditorWorkspace {
    posts: Arc<dyn PostRepository>,
}

impl EditorWorkspace {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Load the post being edited. `None` means a new, blank draft; a
    /// dangling id is an error (the original UI alerts and bounces back to
    /// the blank editor).
    pub async fn load(&self, id: Option<&str>) -> AdminResult<Post> {
        match id {
            None => Ok(Post::draft()),
            Some(id) => self
                .posts
                .find_by_id(id)
                .await?
                .ok_or_else(|| AdminError::PostNotFound { id: id.to_string() }),
        }
    }

    /// Save a draft. Requires a non-empty title.
    pub async fn save(&self, post: Post) -> AdminResult<Post> {
        if post.title.trim().is_empty() {
            return Err(AdminError::Validation(
                "a title is required before saving".to_string(),
            ));
        }
        Ok(self.posts.save(post).await?)
    }

    /// Publish: like save, but requires content too and forces the status to
    /// `published`.
    pub async fn publish(&self, mut post: Post) -> AdminResult<Post> {
        if post.title.trim().is_empty() || post.content.trim().is_empty() {
            return Err(AdminError::Validation(
                "title and content are required before publishing".to_string(),
            ));
        }
        post.status = PostStatus::Published;
        Ok(self.posts.save(post).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pressroom_infra::{InMemoryStorage, PostStore};

    fn workspace() -> EditorWorkspace {
        EditorWorkspace::new(Arc::new(PostStore::new(Arc::new(InMemoryStorage::new()))))
    }

    fn draft(title: &str, content: &str) -> Post {
        Post {
            title: title.to_string(),
            content: content.to_string(),
            ..Post::draft()
        }
    }

    #[tokio::test]
    async fn load_without_id_gives_a_blank_draft() {
        let post = workspace().load(None).await.unwrap();
        assert!(post.id.is_none());
        assert!(post.title.is_empty());
        assert!(post.social_media.is_some());
    }

    #[tokio::test]
    async fn load_with_dangling_id_is_not_found() {
        let err = workspace().load(Some("post_0_missing1")).await.unwrap_err();
        assert!(matches!(err, AdminError::PostNotFound { .. }));
    }

    #[tokio::test]
    async fn save_rejects_blank_title_before_touching_the_store() {
        let ws = workspace();
        let err = ws.save(draft("   ", "body")).await.unwrap_err();
        assert!(matches!(err, AdminError::Validation(_)));
        assert!(ws.posts.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn save_then_reload_by_id() {
        let ws = workspace();
        let saved = ws.save(draft("Title", "body")).await.unwrap();
        let id = saved.id.clone().unwrap();
        let loaded = ws.load(Some(&id)).await.unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn publish_requires_content_and_sets_status() {
        let ws = workspace();
        let err = ws.publish(draft("Title", " ")).await.unwrap_err();
        assert!(matches!(err, AdminError::Validation(_)));

        let published = ws.publish(draft("Title", "<p>body</p>")).await.unwrap();
        assert_eq!(published.status, PostStatus::Published);
    }
}
