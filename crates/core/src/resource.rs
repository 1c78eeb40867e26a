use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Name of a backend collection addressable through the data router.
///
/// Resource names are opaque strings at this layer; binding a name to a
/// concrete adapter is the router's job. The well-known names of this
/// deployment are provided as constants so they are not scattered as
/// string literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceName(Cow<'static, str>);

impl ResourceName {
    pub const USERS: Self = Self(Cow::Borrowed("users"));
    pub const PLANS: Self = Self(Cow::Borrowed("plans"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ResourceName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for ResourceName {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}
