use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// A surface the host can draw as root content, with a downcast hook for
/// type checks in tests.
pub trait View: Any {
    /// Draws into `buf` within `area`. Views with nothing to show keep the default.
    fn render(&self, area: Rect, buf: &mut Buffer) {
        let _ = (area, buf);
    }

    fn as_any(&self) -> &dyn Any;
}
