//! `brandkit-client` — the HTTP boundary of the admin core.
//!
//! Every outgoing backend request goes through [`AdminClient`], which
//! attaches the session's bearer token and elevates 401 responses into a
//! forced global sign-out.

pub mod http;

pub use http::AdminClient;
