//! User-facing notification side-channel.

use tracing::{info, warn};

/// Transient success/failure notifications, distinct from operation return
/// values. Presentation layers plug in their own implementation; this is
/// never a recovery mechanism.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier: structured log lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, message: &str) {
        info!(notification = message, "operation succeeded");
    }

    fn error(&self, message: &str) {
        warn!(notification = message, "operation failed");
    }
}
