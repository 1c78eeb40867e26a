use async_trait::async_trait;
use thiserror::Error;

use brandkit_auth::SessionSnapshot;
use brandkit_core::AdminError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The provider is not loaded or could not be reached.
    #[error("identity provider unavailable: {0}")]
    Unavailable(String),

    /// The bearer token could not be fetched for an active session.
    #[error("token fetch failed: {0}")]
    Token(String),
}

impl From<SessionError> for AdminError {
    fn from(err: SessionError) -> Self {
        AdminError::AuthUnavailable(err.to_string())
    }
}

/// The external identity provider, seen through the narrow surface this
/// core needs.
///
/// Session lifecycle (creation, refresh, destruction) belongs entirely to
/// the provider; this core only reads per check. Implementations wrap the
/// vendor SDK; tests use in-memory doubles.
#[async_trait]
pub trait SessionSource: Send + Sync {
    /// Readiness signal. Idempotent; callers may invoke it before every
    /// check.
    async fn load(&self) -> Result<(), SessionError>;

    /// Live projection of the current session. `None` means signed out.
    async fn current(&self) -> Result<Option<SessionSnapshot>, SessionError>;

    /// Bearer token for the active session, `None` when signed out.
    async fn token(&self) -> Result<Option<String>, SessionError>;

    /// Terminate the active session with the provider.
    async fn sign_out(&self) -> Result<(), SessionError>;
}
