//! Account management services: the editorial team and the subscriber list.

use std::sync::Arc;

use chrono::Utc;

use pressroom_core::domain::{Editor, EditorStatus, Subscriber, SubscriberStatus};
use pressroom_core::error::DirectoryError;
use pressroom_core::ports::{EditorDirectory, NewEditor, SubscriberDirectory};

use crate::error::{AdminError, AdminResult};

/// Editor-account management behind the admin editors page.
pub struct EditorAccounts {
    directory: Arc<dyn EditorDirectory>,
}

impl EditorAccounts {
    pub fn new(directory: Arc<dyn EditorDirectory>) -> Self {
        Self { directory }
    }

    /// Name-or-email substring search (case-insensitive), optionally narrowed
    /// by status.
    pub async fn search(
        &self,
        term: &str,
        status: Option<EditorStatus>,
    ) -> AdminResult<Vec<Editor>> {
        let term = term.to_lowercase();
        let editors = self.directory.list().await?;
        Ok(editors
            .into_iter()
            .filter(|e| {
                let matches_term = e.name.to_lowercase().contains(&term)
                    || e.email.to_lowercase().contains(&term);
                let matches_status = status.is_none_or(|s| e.status == s);
                matches_term && matches_status
            })
            .collect())
    }

    pub async fn add(&self, new_editor: NewEditor) -> AdminResult<Editor> {
        if new_editor.name.trim().is_empty() || new_editor.email.trim().is_empty() {
            return Err(AdminError::Validation(
                "name and email are required".to_string(),
            ));
        }
        Ok(self.directory.add(new_editor).await?)
    }

    pub async fn update(&self, editor: Editor) -> AdminResult<Editor> {
        Ok(self.directory.update(editor).await?)
    }

    pub async fn remove(&self, id: u64) -> AdminResult<()> {
        Ok(self.directory.remove(id).await?)
    }

    /// Flip an editor between active and inactive.
    pub async fn toggle_status(&self, id: u64) -> AdminResult<Editor> {
        let editors = self.directory.list().await?;
        let mut editor = editors
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(AdminError::Directory(DirectoryError::NotFound {
                entity_type: "editor",
                id,
            }))?;
        editor.status = editor.status.toggled();
        Ok(self.directory.update(editor).await?)
    }
}

/// A notification to push to selected subscribers.
#[derive(Debug, Clone)]
pub struct Notification {
    pub subject: String,
    pub message: String,
}

/// Subscriber management behind the admin subscribers page.
pub struct SubscriberAdmin {
    directory: Arc<dyn SubscriberDirectory>,
}

impl SubscriberAdmin {
    pub fn new(directory: Arc<dyn SubscriberDirectory>) -> Self {
        Self { directory }
    }

    /// Name-or-email substring search (case-insensitive), optionally narrowed
    /// by status.
    pub async fn search(
        &self,
        term: &str,
        status: Option<SubscriberStatus>,
    ) -> AdminResult<Vec<Subscriber>> {
        let term = term.to_lowercase();
        let subscribers = self.directory.list().await?;
        Ok(subscribers
            .into_iter()
            .filter(|s| {
                let matches_term = s.name.to_lowercase().contains(&term)
                    || s.email.to_lowercase().contains(&term);
                let matches_status = status.is_none_or(|st| s.status == st);
                matches_term && matches_status
            })
            .collect())
    }

    /// Send (mock-deliver) a notification to the selected subscribers.
    /// Returns the recipient email addresses. Delivery is simulated: the
    /// directory stamps `last_notification` and the send is logged.
    pub async fn notify(&self, ids: &[u64], notification: &Notification) -> AdminResult<Vec<String>> {
        if notification.subject.trim().is_empty() || notification.message.trim().is_empty() {
            return Err(AdminError::Validation(
                "subject and message are required".to_string(),
            ));
        }
        if ids.is_empty() {
            return Err(AdminError::Validation(
                "select at least one subscriber".to_string(),
            ));
        }

        let today = Utc::now().date_naive();
        let notified = self.directory.mark_notified(ids, today).await?;
        let emails: Vec<String> = notified.into_iter().map(|s| s.email).collect();
        tracing::info!(
            subject = %notification.subject,
            recipients = emails.len(),
            "Notification sent"
        );
        Ok(emails)
    }
}
