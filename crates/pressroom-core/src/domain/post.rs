use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Publication status of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Draft,
    Review,
    Published,
}

/// Social-preview metadata attached to a post.
///
/// Persisted records always carry the full nine-field shape; fields the author
/// never filled in are stored as empty strings, not omitted. Partial subsets
/// from older data deserialize with missing fields defaulting to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialMedia {
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub instagram_title: String,
    pub instagram_description: String,
    pub instagram_image: String,
    pub whatsapp_title: String,
    pub whatsapp_description: String,
    pub whatsapp_image: String,
}

/// Post entity - a blog post or article as persisted by the post store.
///
/// Field names serialize in camelCase to match the stored JSON layout.
/// Timestamps are kept as ISO-8601 strings rather than parsed dates so that
/// a record with a malformed timestamp still loads (it sorts as epoch, see
/// [`Post::recency`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Assigned by the store at first save; `None` on an unsaved draft.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub excerpt: String,
    /// Raw HTML produced by the rich-text editor. The store strips bidi
    /// control characters on every read and write but performs no other
    /// sanitization; rendering this safely is the consumer's problem.
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub author: String,
    #[serde(default)]
    pub status: PostStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Post {
    /// A blank draft, as presented by the editor for a new post.
    pub fn draft() -> Self {
        Self {
            social_media: Some(SocialMedia::default()),
            ..Self::default()
        }
    }

    /// Generate a fresh post identifier: `post_<unix-millis>_<9-char-suffix>`.
    ///
    /// Uniqueness is probabilistic. The suffix is drawn from a UUIDv4, so two
    /// ids generated in the same millisecond still differ with overwhelming
    /// probability; there is no collision check against the collection.
    pub fn generate_id() -> String {
        let millis = Utc::now().timestamp_millis();
        let hex = Uuid::new_v4().simple().to_string();
        format!("post_{}_{}", millis, &hex[..9])
    }

    /// Add a tag, trimming whitespace. Duplicate (case-sensitive) and empty
    /// tags are rejected; returns whether the tag was added. The store itself
    /// never enforces tag uniqueness, only this input path does.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.tags.iter().any(|t| t == tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    pub fn remove_tag(&mut self, tag: &str) {
        self.tags.retain(|t| t != tag);
    }

    /// Ensure the social-media block is present with all nine fields.
    pub fn normalize_social_media(&mut self) {
        if self.social_media.is_none() {
            self.social_media = Some(SocialMedia::default());
        }
    }

    /// Stamp save-time metadata: `updated_at` on every call, `created_at`
    /// only the first time.
    pub fn touch(&mut self) {
        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        if self.created_at.is_none() {
            self.created_at = Some(now.clone());
        }
        self.updated_at = Some(now);
    }

    /// Sort key for most-recent-first listings: `updated_at`, falling back to
    /// `created_at` when absent or empty, falling back to epoch. A timestamp
    /// that fails to parse also degrades to epoch instead of erroring.
    pub fn recency(&self) -> DateTime<Utc> {
        self.updated_at
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.created_at.as_deref().filter(|s| !s.is_empty()))
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_id_matches_pattern() {
        let id = Post::generate_id();
        let parts: Vec<&str> = id.splitn(3, '_').collect();
        assert_eq!(parts[0], "post");
        assert!(!parts[1].is_empty() && parts[1].chars().all(|c| c.is_ascii_digit()));
        assert!(!parts[2].is_empty() && parts[2].chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn generated_ids_differ_within_one_millisecond() {
        let mut ids = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(ids.insert(Post::generate_id()), "id collision");
        }
    }

    #[test]
    fn add_tag_rejects_duplicates_and_blank() {
        let mut post = Post::draft();
        assert!(post.add_tag("rust"));
        assert!(!post.add_tag("rust"));
        assert!(post.add_tag("Rust"), "tag uniqueness is case-sensitive");
        assert!(!post.add_tag("   "));
        assert_eq!(post.tags, vec!["rust", "Rust"]);
    }

    #[test]
    fn touch_sets_created_at_only_once() {
        let mut post = Post::draft();
        post.touch();
        let created = post.created_at.clone();
        assert!(created.is_some());

        post.touch();
        assert_eq!(post.created_at, created);
        assert!(post.updated_at.is_some());
    }

    #[test]
    fn recency_falls_back_to_epoch_on_garbage() {
        let mut post = Post::draft();
        assert_eq!(post.recency(), DateTime::UNIX_EPOCH);

        post.updated_at = Some("not a date".to_string());
        assert_eq!(post.recency(), DateTime::UNIX_EPOCH);

        post.updated_at = Some(String::new());
        post.created_at = Some("2024-01-15T10:00:00.000Z".to_string());
        assert_eq!(post.recency().to_rfc3339(), "2024-01-15T10:00:00+00:00");
    }

    #[test]
    fn partial_social_media_deserializes_with_empty_defaults() {
        let json = r#"{"ogTitle":"hello"}"#;
        let sm: SocialMedia = serde_json::from_str(json).unwrap();
        assert_eq!(sm.og_title, "hello");
        assert_eq!(sm.whatsapp_image, "");
    }

    #[test]
    fn post_serializes_camel_case() {
        let mut post = Post::draft();
        post.title = "t".to_string();
        post.touch();
        let json = serde_json::to_string(&post).unwrap();
        assert!(json.contains("\"createdAt\""));
        assert!(json.contains("\"socialMedia\""));
        assert!(json.contains("\"ogTitle\""));
        assert!(!json.contains("\"id\""), "unsaved draft has no id field");
    }
}
