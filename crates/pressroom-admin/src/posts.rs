//! Manage-posts service - listing, filtering, and deletion.

use std::sync::Arc;

use pressroom_core::domain::Post;
use pressroom_core::domain::query::{self, PostFilter};
use pressroom_core::ports::PostRepository;

use crate::error::AdminResult;

/// Built-in editorial categories, always offered even before any post exists.
pub const DEFAULT_CATEGORIES: [&str; 4] = [
    "News & Updates",
    "Acts & Rules",
    "Education & Learning",
    "Leadership & Strategy",
];

pub struct PostAdmin {
    posts: Arc<dyn PostRepository>,
}

impl PostAdmin {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// The listing as displayed: malformed records dropped, newest first,
    /// then narrowed by `filter`.
    pub async fn list(&self, filter: &PostFilter) -> AdminResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .posts
            .list_all()
            .await?
            .into_iter()
            .filter(query::is_listable)
            .collect();
        query::sort_by_recency(&mut posts);
        Ok(query::filter_posts(&posts, filter))
    }

    pub async fn delete(&self, id: &str) -> AdminResult<()> {
        self.posts.delete_by_id(id).await?;
        tracing::info!(post_id = %id, "Post deleted");
        Ok(())
    }

    /// Category choices for the filter dropdown: built-ins plus whatever
    /// categories stored posts actually use.
    pub async fn categories(&self) -> AdminResult<Vec<String>> {
        let posts = self.posts.list_all().await?;
        Ok(query::merge_categories(&DEFAULT_CATEGORIES, &posts))
    }
}
