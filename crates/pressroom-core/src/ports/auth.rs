//! Authentication port.
//!
//! Deliberately a mock-shaped interface: the platform performs no real
//! authentication or authorization enforcement. The port exists so a real
//! implementation can replace the mock without touching the post store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// An established admin session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub email: String,
    pub logged_in_at: DateTime<Utc>,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Establish a session from credentials.
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Drop the current session, if any.
    async fn logout(&self);

    /// The current session, or `None` when logged out.
    async fn current_session(&self) -> Option<Session>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Internal error: {0}")]
    Internal(String),
}
