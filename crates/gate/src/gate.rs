//! Gate evaluation and the auth-provider operations around it.

use std::sync::Arc;

use tracing::{debug, warn};

use brandkit_auth::{AuthDecision, Identity, decide, nav};
use brandkit_core::{AdminError, AdminResult};
use brandkit_session::{Navigator, SessionSource};

/// Gate states, as the presentation layer sees them.
///
/// Every mount/navigation starts in `Loading` until an evaluation
/// resolves. Protected children may render only on exactly
/// `Authenticated`; every other state is fail-closed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GateState {
    #[default]
    Loading,
    Unauthenticated,
    Unauthorized { reason: String },
    Authenticated,
}

impl GateState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// The role-gated entry point to protected content.
///
/// Holds no session state of its own: every check reads the live session,
/// so an externally forced sign-out (the HTTP layer's 401 handler) is
/// reflected by the very next evaluation.
pub struct AuthGate {
    session: Arc<dyn SessionSource>,
    navigator: Arc<dyn Navigator>,
}

impl AuthGate {
    pub fn new(session: Arc<dyn SessionSource>, navigator: Arc<dyn Navigator>) -> Self {
        Self { session, navigator }
    }

    /// One fresh evaluation, no side effects.
    ///
    /// An unavailable provider is treated as signed out rather than
    /// surfaced: the sign-in page is the safe place to land when identity
    /// state cannot be established.
    pub async fn check(&self) -> AuthDecision {
        if let Err(err) = self.session.load().await {
            warn!(error = %err, "identity provider not ready; treating as signed out");
            return AuthDecision::unauthenticated();
        }

        match self.session.current().await {
            Ok(snapshot) => decide(snapshot.as_ref()),
            Err(err) => {
                warn!(error = %err, "failed to read session; treating as signed out");
                AuthDecision::unauthenticated()
            }
        }
    }

    /// Evaluate and apply the decision's effect.
    ///
    /// Unauthenticated redirects to the sign-in surface; Unauthorized is
    /// rendered in place (the user must act, no auto-redirect);
    /// Authenticated lets protected content render.
    pub async fn evaluate(&self) -> GateState {
        match self.check().await {
            AuthDecision::Authenticated => GateState::Authenticated,
            AuthDecision::Unauthenticated { redirect_to } => {
                self.navigator.navigate(redirect_to);
                GateState::Unauthenticated
            }
            AuthDecision::Unauthorized { reason, .. } => GateState::Unauthorized { reason },
        }
    }

    /// Sign-in is owned by the identity provider's hosted surface; from
    /// this core's point of view it always succeeds.
    pub async fn sign_in(&self) -> AdminResult<()> {
        Ok(())
    }

    /// Terminate the session and land on the sign-in surface.
    pub async fn sign_out(&self) -> AdminResult<()> {
        self.session.sign_out().await.map_err(AdminError::from)?;
        self.navigator.navigate(nav::SIGN_IN);
        Ok(())
    }

    /// Identity card for the signed-in user, `None` when signed out.
    pub async fn identity(&self) -> AdminResult<Option<Identity>> {
        self.session.load().await.map_err(AdminError::from)?;
        let snapshot = self.session.current().await.map_err(AdminError::from)?;
        Ok(snapshot.as_ref().map(Identity::from))
    }

    /// The session's role claim, defaulting to `"user"` when absent.
    pub async fn permissions(&self) -> AdminResult<String> {
        self.session.load().await.map_err(AdminError::from)?;
        let snapshot = self.session.current().await.map_err(AdminError::from)?;
        Ok(snapshot
            .and_then(|s| s.role)
            .unwrap_or_else(|| "user".to_string()))
    }

    /// React to a data-layer error status.
    ///
    /// 401 and 403 force a sign-out and a redirect to sign-in; anything
    /// else stays with the caller. Returns whether a sign-out happened.
    pub async fn on_error(&self, status: u16) -> bool {
        if status == 401 || status == 403 {
            if let Err(err) = self.sign_out().await {
                warn!(error = %err, status, "forced sign-out after auth error failed");
            }
            return true;
        }

        debug!(status, "data-layer error outside the gate's scope");
        false
    }
}
