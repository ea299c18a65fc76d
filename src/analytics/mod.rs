//! Analytics tracking capability.
//!
//! Collaborators depend on [`TracksAnalytics`] rather than on a concrete
//! service so tests can substitute a recording double.

/// Records named analytics events.
pub trait TracksAnalytics: Send + Sync {
    fn track(&self, event: &str);
}

/// Default tracking service.
///
/// Stateless. One instance is created by [`crate::context::Services`] at
/// startup and shared for the rest of the process.
#[derive(Debug, Default)]
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }
}

impl TracksAnalytics for AnalyticsService {
    fn track(&self, event: &str) {
        tracing::trace!(target: "analytics", event, "track");
    }
}
