//! `brandkit-session` — capabilities around the external identity provider.
//!
//! The session client is injected explicitly wherever it is needed (auth
//! gate, HTTP client); there is no process-wide singleton to reach for.

pub mod navigator;
pub mod source;

pub use navigator::Navigator;
pub use source::{SessionError, SessionSource};
