//! # Credential Verification and Sessions
//!
//! Admin access control. A [`CredentialVerifier`] checks a username and
//! password and, on success, the portal mints a [`SessionContext`] whose
//! token gates every admin operation.
//!
//! The predecessor kept a boolean "logged in" flag in browser storage,
//! trivially forgeable from the console. Sessions here are server-side
//! values the caller cannot fabricate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

// =============================================================================
// Types
// =============================================================================

/// Opaque session handle issued at login.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionToken(String);

impl SessionToken {
    fn mint() -> Self {
        SessionToken(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A live admin session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionContext {
    pub token: SessionToken,
    pub username: String,
    pub started_at: DateTime<Utc>,
}

impl SessionContext {
    /// Mints a fresh session for a verified user.
    pub fn start(username: impl Into<String>) -> Self {
        let username = username.into();
        info!(user = %username, "admin session started");
        SessionContext {
            token: SessionToken::mint(),
            username,
            started_at: Utc::now(),
        }
    }
}

/// Credential check failures.
///
/// Deliberately one variant for bad input: callers cannot tell "unknown
/// user" from "wrong password".
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid username or password")]
    InvalidCredentials,
}

// =============================================================================
// Contract
// =============================================================================

/// Checks admin credentials.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verifies the pair, returning the canonical username on success.
    async fn verify(&self, username: &str, password: &str) -> Result<String, AuthError>;
}

// =============================================================================
// Static Implementation
// =============================================================================

/// Single fixed credential pair, supplied by configuration.
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        StaticCredentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[async_trait]
impl CredentialVerifier for StaticCredentials {
    async fn verify(&self, username: &str, password: &str) -> Result<String, AuthError> {
        if username == self.username && password == self.password {
            Ok(self.username.clone())
        } else {
            warn!(user = %username, "failed login attempt");
            Err(AuthError::InvalidCredentials)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_correct_credentials_verify() {
        let verifier = StaticCredentials::new("admin", "s3cret");
        assert_eq!(verifier.verify("admin", "s3cret").await.unwrap(), "admin");
    }

    #[tokio::test]
    async fn test_wrong_credentials_rejected_uniformly() {
        let verifier = StaticCredentials::new("admin", "s3cret");

        let wrong_pass = verifier.verify("admin", "nope").await.unwrap_err();
        let wrong_user = verifier.verify("ghost", "s3cret").await.unwrap_err();

        // Same message either way
        assert_eq!(wrong_pass.to_string(), wrong_user.to_string());
    }

    #[test]
    fn test_sessions_are_unique() {
        let a = SessionContext::start("admin");
        let b = SessionContext::start("admin");
        assert_ne!(a.token, b.token);
    }
}
