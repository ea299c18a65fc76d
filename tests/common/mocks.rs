use analytics_screen::analytics::TracksAnalytics;
use analytics_screen::ui::analytics_view::{DisplaysAnalyticsView, ViewModel};
use analytics_screen::ui::view::View;
use parking_lot::Mutex;
use std::any::Any;
use std::sync::Arc;

/// Shared log of calls across both doubles, for ordering assertions.
pub type CallLog = Arc<Mutex<Vec<&'static str>>>;

// -- DisplaysAnalyticsView -----------------------------------------------------

#[derive(Default)]
struct ConfigureCalls {
    was_called: usize,
    received_view_model: Option<ViewModel>,
}

/// Records `configure` calls. Clones share the same record.
#[derive(Clone, Default)]
pub struct DisplaysAnalyticsViewMock {
    configure: Arc<Mutex<ConfigureCalls>>,
    call_log: Option<CallLog>,
}

impl DisplaysAnalyticsViewMock {
    pub fn with_call_log(call_log: CallLog) -> Self {
        Self {
            call_log: Some(call_log),
            ..Self::default()
        }
    }

    pub fn configure_was_called(&self) -> usize {
        self.configure.lock().was_called
    }

    pub fn configure_received_view_model(&self) -> Option<ViewModel> {
        self.configure.lock().received_view_model.clone()
    }
}

impl View for DisplaysAnalyticsViewMock {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl DisplaysAnalyticsView for DisplaysAnalyticsViewMock {
    fn configure(&mut self, view_model: ViewModel) {
        let mut calls = self.configure.lock();
        calls.was_called += 1;
        calls.received_view_model = Some(view_model);
        if let Some(log) = &self.call_log {
            log.lock().push("configure");
        }
    }
}

// -- TracksAnalytics -----------------------------------------------------------

#[derive(Default)]
struct TrackCalls {
    was_called: usize,
    received_event: Option<String>,
}

/// Records `track` calls.
#[derive(Default)]
pub struct TracksAnalyticsMock {
    track: Mutex<TrackCalls>,
    call_log: Option<CallLog>,
}

impl TracksAnalyticsMock {
    pub fn with_call_log(call_log: CallLog) -> Self {
        Self {
            call_log: Some(call_log),
            ..Self::default()
        }
    }

    pub fn track_event_was_called(&self) -> usize {
        self.track.lock().was_called
    }

    pub fn track_event_received_event(&self) -> Option<String> {
        self.track.lock().received_event.clone()
    }
}

impl TracksAnalytics for TracksAnalyticsMock {
    fn track(&self, event: &str) {
        let mut calls = self.track.lock();
        calls.was_called += 1;
        calls.received_event = Some(event.to_string());
        if let Some(log) = &self.call_log {
            log.lock().push("track");
        }
    }
}
