// ============================================================================
// Tick Observer Interface
// Defines the contract for consuming tick snapshots
// ============================================================================

use crate::ticker::TickSnapshot;

/// Observer notified after every tick of the earnings loop.
/// Implementations can handle logging, title updates, persistence, etc.
pub trait TickObserver: Send + Sync {
    /// Handle a freshly computed snapshot
    fn on_tick(&self, snapshot: &TickSnapshot);

    /// Called once when the loop stops (optional)
    fn on_stop(&self) {}
}

/// No-op observer for testing
pub struct NoOpTickObserver;

impl TickObserver for NoOpTickObserver {
    fn on_tick(&self, _snapshot: &TickSnapshot) {
        // Do nothing
    }
}

/// Logging observer
pub struct LoggingTickObserver;

impl TickObserver for LoggingTickObserver {
    fn on_tick(&self, snapshot: &TickSnapshot) {
        tracing::debug!(
            "Tick at {}: {:?} {} ({}%)",
            snapshot.at,
            snapshot.earnings.phase,
            snapshot.display.to_display_string(),
            snapshot.earnings.progress_percent.round_dp(1)
        );
    }

    fn on_stop(&self) {
        tracing::debug!("Earnings ticker stopped");
    }
}
