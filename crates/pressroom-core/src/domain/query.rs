//! Filtering and ordering for post listings.
//!
//! The store returns posts in storage order; everything display-related
//! (search, status/category narrowing, most-recent-first sort) lives here as
//! pure functions over the loaded collection.

use super::post::{Post, PostStatus};

/// Narrowing criteria for the manage-posts listing. `None` means "all".
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub status: Option<PostStatus>,
    pub category: Option<String>,
    /// Free-text search. Matches case-insensitively as a substring of title,
    /// excerpt, or author, or as an exact (case-insensitive) tag.
    pub search: Option<String>,
}

impl PostFilter {
    pub fn matches(&self, post: &Post) -> bool {
        if let Some(status) = self.status {
            if post.status != status {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &post.category != category {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let query = search.trim().to_lowercase();
            if !query.is_empty() && !text_matches(post, &query) {
                return false;
            }
        }
        true
    }
}

fn text_matches(post: &Post, query: &str) -> bool {
    post.title.to_lowercase().contains(query)
        || post.excerpt.to_lowercase().contains(query)
        || post.author.to_lowercase().contains(query)
        || post.tags.iter().any(|tag| tag.to_lowercase() == query)
}

/// Apply `filter` to `posts`, preserving their order.
pub fn filter_posts(posts: &[Post], filter: &PostFilter) -> Vec<Post> {
    posts
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}

/// Sort most-recent-first by [`Post::recency`]. Stable, so records with equal
/// (or unparseable, hence epoch) timestamps keep their storage order.
pub fn sort_by_recency(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.recency().cmp(&a.recency()));
}

/// A record worth listing: has at least an id or a title. Anything else is
/// treated as debris from a partial write and dropped from listings.
pub fn is_listable(post: &Post) -> bool {
    post.id.is_some() || !post.title.is_empty()
}

/// The category choices offered by the admin UI: the built-in editorial
/// categories followed by any distinct categories observed in stored posts.
pub fn merge_categories(builtin: &[&str], posts: &[Post]) -> Vec<String> {
    let mut categories: Vec<String> = builtin.iter().map(|c| c.to_string()).collect();
    for post in posts {
        if !post.category.is_empty() && !categories.contains(&post.category) {
            categories.push(post.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(title: &str, status: PostStatus, category: &str) -> Post {
        Post {
            id: Some(format!("post_0_{}", title.to_lowercase().replace(' ', ""))),
            title: title.to_string(),
            status,
            category: category.to_string(),
            ..Post::draft()
        }
    }

    #[test]
    fn status_and_search_combine() {
        let posts = vec![
            post("Alpha Ruling", PostStatus::Published, "News"),
            post("Beta Act", PostStatus::Draft, "Acts"),
            post("Alpha Study", PostStatus::Published, "Education"),
        ];
        let filter = PostFilter {
            status: Some(PostStatus::Published),
            search: Some("alpha".to_string()),
            ..PostFilter::default()
        };

        let hits = filter_posts(&posts, &filter);
        let titles: Vec<&str> = hits.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Alpha Ruling", "Alpha Study"]);
    }

    #[test]
    fn search_matches_author_and_exact_tag_only() {
        let mut tagged = post("Untitled", PostStatus::Draft, "");
        tagged.add_tag("rustlang");
        let mut by_author = post("Other", PostStatus::Draft, "");
        by_author.author = "Jane Doe".to_string();
        let posts = vec![tagged, by_author];

        let find = |q: &str| {
            filter_posts(
                &posts,
                &PostFilter {
                    search: Some(q.to_string()),
                    ..PostFilter::default()
                },
            )
            .len()
        };

        assert_eq!(find("RUSTLANG"), 1, "tag match is case-insensitive");
        assert_eq!(find("rust"), 0, "tag match is exact, not substring");
        assert_eq!(find("jane d"), 1, "author match is substring");
    }

    #[test]
    fn blank_search_passes_everything() {
        let posts = vec![post("One", PostStatus::Draft, "")];
        let filter = PostFilter {
            search: Some("   ".to_string()),
            ..PostFilter::default()
        };
        assert_eq!(filter_posts(&posts, &filter).len(), 1);
    }

    #[test]
    fn category_filter_is_exact() {
        let posts = vec![post("One", PostStatus::Draft, "News & Updates")];
        let filter = PostFilter {
            category: Some("News".to_string()),
            ..PostFilter::default()
        };
        assert!(filter_posts(&posts, &filter).is_empty());
    }

    #[test]
    fn sort_puts_newest_first_and_garbage_last() {
        let mut older = post("older", PostStatus::Draft, "");
        older.updated_at = Some("2024-01-10T00:00:00.000Z".to_string());
        let mut newer = post("newer", PostStatus::Draft, "");
        newer.updated_at = Some("2024-01-20T00:00:00.000Z".to_string());
        let mut broken = post("broken", PostStatus::Draft, "");
        broken.updated_at = Some("never".to_string());

        let mut posts = vec![broken, older, newer];
        sort_by_recency(&mut posts);
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["newer", "older", "broken"]);
    }

    #[test]
    fn merge_categories_keeps_builtin_order_and_dedupes() {
        let posts = vec![
            post("a", PostStatus::Draft, "News & Updates"),
            post("b", PostStatus::Draft, "Recipes"),
            post("c", PostStatus::Draft, "Recipes"),
            post("d", PostStatus::Draft, ""),
        ];
        let merged = merge_categories(&["News & Updates", "Acts & Rules"], &posts);
        assert_eq!(merged, vec!["News & Updates", "Acts & Rules", "Recipes"]);
    }

    #[test]
    fn listable_requires_id_or_title() {
        assert!(!is_listable(&Post::draft()));
        assert!(is_listable(&post("titled", PostStatus::Draft, "")));
        let mut id_only = Post::draft();
        id_only.id = Some("post_1_abc".to_string());
        assert!(is_listable(&id_only));
    }
}
