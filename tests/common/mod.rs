//! Shared test utilities and doubles.

#![allow(dead_code, unused_imports)]

pub mod mocks;

use analytics_screen::analytics::TracksAnalytics;
use analytics_screen::ui::analytics_view::DisplaysAnalyticsView;
use analytics_screen::ui::controller::AnalyticsViewController;
use std::sync::Arc;

pub use mocks::{CallLog, DisplaysAnalyticsViewMock, TracksAnalyticsMock};

/// Controller wired to fresh doubles. The returned doubles observe the same
/// calls as the ones the controller holds.
pub fn make_controller_with_mocks() -> (
    AnalyticsViewController,
    Arc<TracksAnalyticsMock>,
    DisplaysAnalyticsViewMock,
) {
    let analytics_service_mock = Arc::new(TracksAnalyticsMock::default());
    let content_view_mock = DisplaysAnalyticsViewMock::default();

    let mut controller = AnalyticsViewController::with_analytics_service(
        Arc::clone(&analytics_service_mock) as Arc<dyn TracksAnalytics>,
    );
    controller.set_content_view(content_view_mock.clone());

    (controller, analytics_service_mock, content_view_mock)
}

/// Address of a view, for identity comparisons.
pub fn view_addr(view: &dyn DisplaysAnalyticsView) -> *const () {
    std::ptr::from_ref(view).cast::<()>()
}
