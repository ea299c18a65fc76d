use std::sync::Arc;

use crate::analytics::{AnalyticsService, TracksAnalytics};

/// Process-wide collaborators, built once in `main` and passed down explicitly.
#[derive(Clone)]
pub struct Services {
    analytics: Arc<dyn TracksAnalytics>,
}

impl Services {
    pub fn new() -> Self {
        Self::with_analytics(Arc::new(AnalyticsService::new()))
    }

    pub fn with_analytics(analytics: Arc<dyn TracksAnalytics>) -> Self {
        Self { analytics }
    }

    /// Shared tracking service. Every call returns the same instance.
    pub fn analytics(&self) -> Arc<dyn TracksAnalytics> {
        Arc::clone(&self.analytics)
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}
