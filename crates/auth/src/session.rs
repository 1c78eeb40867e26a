use serde::{Deserialize, Serialize};

/// Projection of the external identity object, read fresh per check.
///
/// Existence of a snapshot means the user is signed in; the bearer token is
/// not part of the projection (it is fetched asynchronously on demand by
/// the HTTP layer). This core never persists snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Option<String>,
}

impl SessionSnapshot {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: None,
            email: None,
            avatar_url: None,
            role: None,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_avatar_url(mut self, url: impl Into<String>) -> Self {
        self.avatar_url = Some(url.into());
        self
    }
}

/// Identity card handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl From<&SessionSnapshot> for Identity {
    fn from(snapshot: &SessionSnapshot) -> Self {
        Self {
            id: snapshot.user_id.clone(),
            name: snapshot.name.clone().unwrap_or_else(|| "User".to_string()),
            email: snapshot.email.clone().unwrap_or_default(),
            avatar_url: snapshot.avatar_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_falls_back_to_placeholder_name_and_empty_email() {
        let snapshot = SessionSnapshot::new("user_1");
        let identity = Identity::from(&snapshot);
        assert_eq!(identity.name, "User");
        assert_eq!(identity.email, "");
        assert_eq!(identity.avatar_url, None);
    }

    #[test]
    fn identity_carries_profile_fields_when_present() {
        let snapshot = SessionSnapshot::new("user_1")
            .with_name("Jane Doe")
            .with_email("jane@example.com")
            .with_avatar_url("https://img.example.com/jane.png");
        let identity = Identity::from(&snapshot);
        assert_eq!(identity.id, "user_1");
        assert_eq!(identity.name, "Jane Doe");
        assert_eq!(identity.email, "jane@example.com");
        assert_eq!(
            identity.avatar_url.as_deref(),
            Some("https://img.example.com/jane.png")
        );
    }
}
