use crate::config::UiConfig;
use crate::context::Services;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::TerminalSession;
use std::io;
use std::sync::mpsc::RecvTimeoutError;

pub fn run(services: &Services, config: &UiConfig) -> io::Result<()> {
    let mut session = TerminalSession::enter()?;
    let tick_rate = config.tick_rate();
    let mut app = App::new(services);
    let events = EventHandler::new(tick_rate)?;

    loop {
        session.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        handle_event(&mut app, events.next(tick_rate))?;
    }

    Ok(())
}

/// Applies one event to the app. Reader failures end the loop with an error.
fn handle_event(app: &mut App, event: Result<AppEvent, RecvTimeoutError>) -> io::Result<()> {
    match event {
        Ok(AppEvent::Key(key)) => handle_key(app, key),
        Ok(AppEvent::Tick) | Err(RecvTimeoutError::Timeout) => {}
        // The next draw picks up the new frame size.
        Ok(AppEvent::Resize(cols, rows)) => {
            tracing::debug!(cols, rows, "Terminal resized");
        }
        Ok(AppEvent::Failed(err)) => return Err(err),
        Err(RecvTimeoutError::Disconnected) => {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "terminal event reader stopped",
            ));
        }
    }
    Ok(())
}
