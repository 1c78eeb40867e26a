//! `brandkit-auth` — pure authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP, the identity provider
//! and any runtime: it only projects session state and decides.

pub mod decision;
pub mod policy;
pub mod roles;
pub mod session;

pub use decision::{ACCESS_DENIED_REASON, AuthDecision, decide, nav};
pub use policy::is_authorized;
pub use roles::{ALLOWED_ROLES, Role, role_allowed};
pub use session::{Identity, SessionSnapshot};
