//! Controller for the analytics screen.
//!
//! Owns the content view and a handle to the tracking service. The host
//! attaches the view with [`AnalyticsViewController::load_view`] and then
//! fires [`AnalyticsViewController::view_did_load`] once.

use std::sync::Arc;

use crate::analytics::TracksAnalytics;
use crate::context::Services;
use crate::ui::analytics_view::{AnalyticsView, DisplaysAnalyticsView, ViewModel};

/// Event tracked when the screen becomes active.
pub const VIEW_DID_LOAD_EVENT: &str = "View did load!";

/// Title shown on the analytics button.
pub const ANALYTICS_BUTTON_TITLE: &str = "Analytics!";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LifecycleState {
    Inactive,
    Active,
}

/// Drives the analytics screen: one tracked event and one view configuration on load.
pub struct AnalyticsViewController {
    analytics_service: Arc<dyn TracksAnalytics>,
    content_view: Box<dyn DisplaysAnalyticsView>,
    view_loaded: bool,
    state: LifecycleState,
}

impl AnalyticsViewController {
    /// Binds to the shared tracking service from `services`.
    pub fn new(services: &Services) -> Self {
        Self::with_analytics_service(services.analytics())
    }

    pub fn with_analytics_service(analytics_service: Arc<dyn TracksAnalytics>) -> Self {
        Self {
            analytics_service,
            content_view: Box::new(AnalyticsView::new()),
            view_loaded: false,
            state: LifecycleState::Inactive,
        }
    }

    pub fn analytics_service(&self) -> &Arc<dyn TracksAnalytics> {
        &self.analytics_service
    }

    pub fn content_view(&self) -> &dyn DisplaysAnalyticsView {
        self.content_view.as_ref()
    }

    /// Replaces the content view. Meant to be called before `view_did_load`.
    pub fn set_content_view<V: DisplaysAnalyticsView + 'static>(&mut self, view: V) {
        if self.state == LifecycleState::Active {
            tracing::warn!("Content view replaced after activation");
        }
        self.content_view = Box::new(view);
    }

    /// Attaches the content view as this controller's root view and returns it.
    pub fn load_view(&mut self) -> &dyn DisplaysAnalyticsView {
        tracing::debug!("Analytics view attached");
        self.view_loaded = true;
        self.content_view.as_ref()
    }

    /// The attached view, once `load_view` has run.
    pub fn view(&self) -> Option<&dyn DisplaysAnalyticsView> {
        self.view_loaded.then(|| self.content_view.as_ref())
    }

    pub fn is_view_loaded(&self) -> bool {
        self.view_loaded
    }

    /// Lifecycle-start hook. Tracks the load event, then configures the view.
    ///
    /// Calling it again repeats both side effects.
    pub fn view_did_load(&mut self) {
        self.analytics_service.track(VIEW_DID_LOAD_EVENT);
        self.content_view
            .configure(ViewModel::new(ANALYTICS_BUTTON_TITLE));

        if self.state == LifecycleState::Inactive {
            tracing::debug!("Analytics view controller activated");
        }
        self.state = LifecycleState::Active;
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }
}
