//! Startup configuration read from the process environment.

use thiserror::Error;

/// Env var naming the backend base URL, e.g. `http://localhost:8000/api/v1`.
pub const API_URL_VAR: &str = "API_URL";

/// Env var carrying the identity provider's publishable key.
pub const IDENTITY_KEY_VAR: &str = "IDENTITY_PUBLISHABLE_KEY";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Process-level configuration for the admin core.
///
/// Read once at startup; the session source itself is an injected
/// capability, so the publishable key is only carried here for whoever
/// bootstraps that provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    pub api_url: String,
    pub identity_publishable_key: Option<String>,
}

impl AdminConfig {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            identity_publishable_key: None,
        }
    }

    pub fn with_identity_key(mut self, key: impl Into<String>) -> Self {
        self.identity_publishable_key = Some(key.into());
        self
    }

    /// Read configuration from the process environment.
    ///
    /// A missing backend URL is a hard error; a missing publishable key is
    /// tolerated with a warning, since an embedding may inject a session
    /// source that does not need it.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_url =
            std::env::var(API_URL_VAR).map_err(|_| ConfigError::MissingVar(API_URL_VAR))?;

        let identity_publishable_key = std::env::var(IDENTITY_KEY_VAR).ok();
        if identity_publishable_key.is_none() {
            tracing::warn!(
                "{} not set; identity provider must be bootstrapped elsewhere",
                IDENTITY_KEY_VAR
            );
        }

        Ok(Self {
            api_url,
            identity_publishable_key,
        })
    }
}
