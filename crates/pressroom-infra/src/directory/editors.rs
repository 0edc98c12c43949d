//! In-memory editor directory.
//!
//! Stands in for an editor-account backend that does not exist yet. State is
//! process-local and lost on restart.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;

use pressroom_core::domain::{Editor, EditorStatus};
use pressroom_core::error::DirectoryError;
use pressroom_core::ports::{EditorDirectory, NewEditor};

pub struct InMemoryEditorDirectory {
    editors: RwLock<Vec<Editor>>,
}

impl InMemoryEditorDirectory {
    pub fn new() -> Self {
        Self {
            editors: RwLock::new(Vec::new()),
        }
    }

    /// Directory pre-populated with the sample editorial team.
    pub fn seeded() -> Self {
        Self {
            editors: RwLock::new(sample_editors()),
        }
    }
}

impl Default for InMemoryEditorDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EditorDirectory for InMemoryEditorDirectory {
    async fn list(&self) -> Result<Vec<Editor>, DirectoryError> {
        Ok(self.editors.read().await.clone())
    }

    async fn add(&self, new_editor: NewEditor) -> Result<Editor, DirectoryError> {
        // Millisecond ids, like post ids minus the suffix: fine at this volume.
        let id = Utc::now().timestamp_millis() as u64;
        let editor = Editor::new(
            id,
            new_editor.name,
            new_editor.email,
            new_editor.role,
            new_editor.permissions,
        );
        self.editors.write().await.push(editor.clone());
        tracing::debug!(editor_id = id, "Editor added");
        Ok(editor)
    }

    async fn update(&self, editor: Editor) -> Result<Editor, DirectoryError> {
        let mut editors = self.editors.write().await;
        match editors.iter_mut().find(|e| e.id == editor.id) {
            Some(slot) => {
                *slot = editor.clone();
                Ok(editor)
            }
            None => Err(DirectoryError::NotFound {
                entity_type: "editor",
                id: editor.id,
            }),
        }
    }

    async fn remove(&self, id: u64) -> Result<(), DirectoryError> {
        self.editors.write().await.retain(|e| e.id != id);
        Ok(())
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

fn sample_editors() -> Vec<Editor> {
    let perms = |list: &[&str]| list.iter().map(|p| p.to_string()).collect::<Vec<_>>();
    vec![
        Editor {
            id: 1,
            name: "Sarah Johnson".to_string(),
            email: "sarah.johnson@example.com".to_string(),
            role: "Senior Editor".to_string(),
            status: EditorStatus::Active,
            joined_at: date(2023, 6, 15),
            last_active: date(2024, 1, 20),
            posts_count: 24,
            permissions: perms(&["create", "edit", "publish", "delete"]),
            avatar: "SJ".to_string(),
        },
        Editor {
            id: 2,
            name: "Michael Chen".to_string(),
            email: "michael.chen@example.com".to_string(),
            role: "Editor".to_string(),
            status: EditorStatus::Active,
            joined_at: date(2023, 8, 22),
            last_active: date(2024, 1, 19),
            posts_count: 17,
            permissions: perms(&["create", "edit", "publish"]),
            avatar: "MC".to_string(),
        },
        Editor {
            id: 3,
            name: "Emily Rodriguez".to_string(),
            email: "emily.rodriguez@example.com".to_string(),
            role: "Contributor".to_string(),
            status: EditorStatus::Inactive,
            joined_at: date(2023, 11, 3),
            last_active: date(2023, 12, 28),
            posts_count: 5,
            permissions: perms(&["create", "edit"]),
            avatar: "ER".to_string(),
        },
    ]
}
