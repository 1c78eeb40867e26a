//! `brandkit-gate` — the auth gate in front of every protected surface.
//!
//! Composes the injected session source with the pure authorization policy
//! and decides, per navigation, whether protected content may render.

pub mod gate;

pub use gate::{AuthGate, GateState};
