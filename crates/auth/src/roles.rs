use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// The fixed allow-set for the admin dashboard.
///
/// Membership is checked case-insensitively on the trimmed claim.
pub const ALLOWED_ROLES: [&str; 3] = ["admin", "sales", "support"];

/// Whether a raw role claim grants access.
///
/// Fail-closed: empty or whitespace-only claims are rejected.
pub fn role_allowed(role: &str) -> bool {
    let normalized = role.trim().to_lowercase();
    !normalized.is_empty() && ALLOWED_ROLES.contains(&normalized.as_str())
}

/// Role claim supplied by the identity provider.
///
/// Roles are opaque strings at this layer; the allow-set check is the only
/// policy applied to them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(Cow<'static, str>);

impl Role {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_allowed(&self) -> bool {
        role_allowed(&self.0)
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
