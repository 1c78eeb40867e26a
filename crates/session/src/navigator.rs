/// Redirect surface driven by the auth gate and the 401 handler.
///
/// Navigation is fire-and-forget from this core's point of view; the
/// presentation layer decides what a target actually renders. Targets are
/// the reserved paths in `brandkit_auth::nav`.
pub trait Navigator: Send + Sync {
    fn navigate(&self, target: &str);
}
