use crate::context::Services;
use crate::ui::controller::AnalyticsViewController;

/// Host state for the terminal UI.
pub struct App {
    controller: AnalyticsViewController,
    should_quit: bool,
}

impl App {
    /// Builds the screen with default collaborators and brings it up.
    pub fn new(services: &Services) -> Self {
        Self::with_controller(AnalyticsViewController::new(services))
    }

    /// Attaches the controller's view as root content, then activates it.
    pub fn with_controller(mut controller: AnalyticsViewController) -> Self {
        controller.load_view();
        controller.view_did_load();
        tracing::info!("Analytics screen started");

        Self {
            controller,
            should_quit: false,
        }
    }

    pub fn controller(&self) -> &AnalyticsViewController {
        &self.controller
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        if !self.should_quit {
            tracing::info!("Quit requested");
        }
        self.should_quit = true;
    }
}
