use crate::roles::role_allowed;
use crate::session::SessionSnapshot;

/// Authorization policy: does this session's role claim grant access?
///
/// - No IO
/// - No panics
/// - Fail-closed: absent session, absent claim and empty claim all deny
pub fn is_authorized(session: Option<&SessionSnapshot>) -> bool {
    let Some(session) = session else {
        return false;
    };

    session
        .role
        .as_deref()
        .is_some_and(role_allowed)
}
