//! Directory ports for editor accounts and newsletter subscribers.
//!
//! Both stand in for backend services that do not exist yet; the in-memory
//! implementations in `pressroom-infra` serve seeded mock data.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Editor, Subscriber};
use crate::error::DirectoryError;

/// Input for adding an editor account; everything else (id, status, dates,
/// avatar) is derived at insertion time.
#[derive(Debug, Clone)]
pub struct NewEditor {
    pub name: String,
    pub email: String,
    pub role: String,
    pub permissions: Vec<String>,
}

#[async_trait]
pub trait EditorDirectory: Send + Sync {
    async fn list(&self) -> Result<Vec<Editor>, DirectoryError>;

    async fn add(&self, new_editor: NewEditor) -> Result<Editor, DirectoryError>;

    /// Full replace of the editor with the same id.
    async fn update(&self, editor: Editor) -> Result<Editor, DirectoryError>;

    /// No-op when the id does not exist.
    async fn remove(&self, id: u64) -> Result<(), DirectoryError>;
}

#[async_trait]
pub trait SubscriberDirectory: Send + Sync {
    async fn list(&self) -> Result<Vec<Subscriber>, DirectoryError>;

    /// Stamp `last_notification` on every subscriber in `ids` and return the
    /// ones that were found. Unknown ids are skipped, not errors.
    async fn mark_notified(
        &self,
        ids: &[u64],
        date: NaiveDate,
    ) -> Result<Vec<Subscriber>, DirectoryError>;
}
