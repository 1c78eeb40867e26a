use crate::policy::is_authorized;
use crate::session::SessionSnapshot;

/// Reserved navigation targets. These surfaces must stay reachable without
/// passing through the auth gate.
pub mod nav {
    pub const SIGN_IN: &str = "/sign-in";
    pub const SIGN_UP: &str = "/sign-up";
    pub const UNAUTHORIZED: &str = "/unauthorized";
}

/// Copy shown when a signed-in user lacks an allowed role.
pub const ACCESS_DENIED_REASON: &str =
    "Access denied. Only Admin and Sales Support roles are allowed.";

/// Outcome of one gate evaluation.
///
/// Computed fresh on every check and never cached, so it always reflects
/// live session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    Authenticated,
    Unauthenticated { redirect_to: &'static str },
    Unauthorized {
        redirect_to: &'static str,
        reason: String,
    },
}

impl AuthDecision {
    pub fn unauthenticated() -> Self {
        Self::Unauthenticated {
            redirect_to: nav::SIGN_IN,
        }
    }

    pub fn unauthorized() -> Self {
        Self::Unauthorized {
            redirect_to: nav::UNAUTHORIZED,
            reason: ACCESS_DENIED_REASON.to_string(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Pure decision over a loaded session state.
///
/// `None` means signed out. The gate adds the loading/readiness handling on
/// top of this.
pub fn decide(session: Option<&SessionSnapshot>) -> AuthDecision {
    match session {
        None => AuthDecision::unauthenticated(),
        Some(snapshot) if is_authorized(Some(snapshot)) => AuthDecision::Authenticated,
        Some(_) => AuthDecision::unauthorized(),
    }
}
