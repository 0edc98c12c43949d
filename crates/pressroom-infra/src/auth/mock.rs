//! Mock authentication - accepts any non-empty credentials.
//!
//! The admin login screen needs something to talk to, but the platform does
//! no real authentication (an explicit non-goal). Nothing downstream checks
//! the session; this exists so a real service can slot in behind the same
//! port later.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use pressroom_core::ports::{AuthError, AuthService, Session};

pub struct MockAuthService {
    session: RwLock<Option<Session>>,
    /// Simulated round-trip delay for the login call. Zero by default.
    latency: Duration,
}

impl MockAuthService {
    pub fn new() -> Self {
        Self::with_latency(Duration::ZERO)
    }

    pub fn with_latency(latency: Duration) -> Self {
        Self {
            session: RwLock::new(None),
            latency,
        }
    }
}

impl Default for MockAuthService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthService for MockAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if email.trim().is_empty() || password.is_empty() {
            return Err(AuthError::InvalidCredentials);
        }

        let session = Session {
            email: email.trim().to_string(),
            logged_in_at: Utc::now(),
        };
        *self.session.write().await = Some(session.clone());
        tracing::debug!("Mock login accepted");
        Ok(session)
    }

    async fn logout(&self) {
        *self.session.write().await = None;
    }

    async fn current_session(&self) -> Option<Session> {
        self.session.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_any_non_empty_credentials_pass() {
        let auth = MockAuthService::new();
        let session = auth.login("admin@example.com", "anything").await.unwrap();
        assert_eq!(session.email, "admin@example.com");
        assert_eq!(auth.current_session().await, Some(session));
    }

    #[tokio::test]
    async fn test_empty_credentials_are_rejected() {
        let auth = MockAuthService::new();
        assert!(auth.login("", "pw").await.is_err());
        assert!(auth.login("a@b.c", "").await.is_err());
        assert!(auth.current_session().await.is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_the_session() {
        let auth = MockAuthService::new();
        auth.login("admin@example.com", "pw").await.unwrap();
        auth.logout().await;
        assert!(auth.current_session().await.is_none());
    }
}
