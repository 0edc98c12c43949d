use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorStatus {
    Active,
    Inactive,
}

impl EditorStatus {
    pub fn toggled(self) -> Self {
        match self {
            Self::Active => Self::Inactive,
            Self::Inactive => Self::Active,
        }
    }
}

/// Editor account - a member of the editorial team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Editor {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub role: String,
    pub status: EditorStatus,
    pub joined_at: NaiveDate,
    pub last_active: NaiveDate,
    pub posts_count: u32,
    pub permissions: Vec<String>,
    /// Display initials shown in place of a profile picture.
    pub avatar: String,
}

impl Editor {
    /// Create a freshly-joined editor: active, zero posts, joined today.
    pub fn new(id: u64, name: String, email: String, role: String, permissions: Vec<String>) -> Self {
        let today = Utc::now().date_naive();
        let avatar = initials(&name);
        Self {
            id,
            name,
            email,
            role,
            status: EditorStatus::Active,
            joined_at: today,
            last_active: today,
            posts_count: 0,
            permissions,
            avatar,
        }
    }
}

/// First letter of each whitespace-separated name part, e.g. "Sarah Johnson" -> "SJ".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_full_name() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn new_editor_starts_active_with_no_posts() {
        let e = Editor::new(
            1,
            "Michael Chen".to_string(),
            "michael@example.com".to_string(),
            "Editor".to_string(),
            vec!["create".to_string(), "edit".to_string()],
        );
        assert_eq!(e.status, EditorStatus::Active);
        assert_eq!(e.posts_count, 0);
        assert_eq!(e.avatar, "MC");
    }

    #[test]
    fn status_toggles() {
        assert_eq!(EditorStatus::Active.toggled(), EditorStatus::Inactive);
        assert_eq!(EditorStatus::Inactive.toggled(), EditorStatus::Active);
    }
}
