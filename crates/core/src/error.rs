//! Error taxonomy for the admin core.

use thiserror::Error;

/// Result type used across the admin core.
pub type AdminResult<T> = Result<T, AdminError>;

/// Failure modes surfaced by the admin core.
///
/// Authorization failures are handled (rendered) inside the auth gate and
/// never reach the data layer; everything else propagates to the caller as a
/// rejected operation. There is no automatic retry anywhere in this core.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AdminError {
    /// The identity provider is not ready or could not be reached.
    #[error("identity provider unavailable: {0}")]
    AuthUnavailable(String),

    /// The session's role claim failed the allow-set check.
    #[error("access denied: {0}")]
    AuthDenied(String),

    /// Transport-level failure (connect, DNS, malformed body).
    #[error("network error: {0}")]
    Network(String),

    /// Non-2xx response, with the server-supplied message when one exists.
    #[error("server error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    Server {
        status: u16,
        message: Option<String>,
    },

    /// The backend reported absence for a single-item fetch.
    #[error("not found")]
    NotFound,
}

impl AdminError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::AuthUnavailable(msg.into())
    }

    pub fn denied(msg: impl Into<String>) -> Self {
        Self::AuthDenied(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn server(status: u16, message: Option<String>) -> Self {
        Self::Server { status, message }
    }

    /// Server-supplied message, if this error carries one.
    ///
    /// Used by adapters that turn failures into user-facing notifications.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// HTTP status behind this error, when there is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            Self::NotFound => Some(404),
            _ => None,
        }
    }
}
