//! Admin context - the composed set of ports shared by all admin services.

use std::sync::Arc;

use pressroom_core::ports::{
    AuthService, EditorDirectory, PostRepository, Session, SubscriberDirectory,
};
use pressroom_infra::{
    InMemoryEditorDirectory, InMemoryStorage, InMemorySubscriberDirectory, JsonFileStorage,
    MockAuthService, PostStore,
};

use crate::accounts::{EditorAccounts, SubscriberAdmin};
use crate::config::AdminConfig;
use crate::error::AdminResult;
use crate::posts::PostAdmin;
use crate::workspace::EditorWorkspace;

/// Shared application context. Cheap to clone; all ports are behind `Arc`.
#[derive(Clone)]
pub struct AdminContext {
    pub posts: Arc<dyn PostRepository>,
    pub auth: Arc<dyn AuthService>,
    pub editors: Arc<dyn EditorDirectory>,
    pub subscribers: Arc<dyn SubscriberDirectory>,
}

impl AdminContext {
    /// Everything in memory: volatile post storage, seeded directories.
    pub fn in_memory() -> Self {
        Self::build(Arc::new(PostStore::new(Arc::new(InMemoryStorage::new()))))
    }

    /// Wire ports from configuration: file-backed post storage when a data
    /// directory is configured, in-memory otherwise.
    pub fn from_config(config: &AdminConfig) -> Self {
        let store = match &config.data_dir {
            Some(dir) => {
                tracing::info!(dir = %dir.display(), "Using file-backed post storage");
                PostStore::with_key(
                    Arc::new(JsonFileStorage::new(dir.clone())),
                    config.storage_key.clone(),
                )
            }
            None => {
                tracing::info!("No data directory configured, post storage is in-memory");
                PostStore::with_key(Arc::new(InMemoryStorage::new()), config.storage_key.clone())
            }
        };
        Self::build(Arc::new(store))
    }

    fn build(posts: Arc<dyn PostRepository>) -> Self {
        Self {
            posts,
            auth: Arc::new(MockAuthService::new()),
            editors: Arc::new(InMemoryEditorDirectory::seeded()),
            subscribers: Arc::new(InMemorySubscriberDirectory::seeded()),
        }
    }

    /// Establish an admin session. Mocked: any non-empty credentials pass.
    pub async fn login(&self, email: &str, password: &str) -> AdminResult<Session> {
        Ok(self.auth.login(email, password).await?)
    }

    pub fn editor_workspace(&self) -> EditorWorkspace {
        EditorWorkspace::new(Arc::clone(&self.posts))
    }

    pub fn post_admin(&self) -> PostAdmin {
        PostAdmin::new(Arc::clone(&self.posts))
    }

    pub fn editor_accounts(&self) -> EditorAccounts {
        EditorAccounts::new(Arc::clone(&self.editors))
    }

    pub fn subscriber_admin(&self) -> SubscriberAdmin {
        SubscriberAdmin::new(Arc::clone(&self.subscribers))
    }
}
