use crate::ui::app::App;
use ratatui::Frame;

/// Draws the controller's attached view over the whole frame.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    if let Some(view) = app.controller().view() {
        view.render(area, frame.buffer_mut());
    }
}
