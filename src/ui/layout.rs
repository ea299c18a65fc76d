use ratatui::layout::Rect;

/// Horizontal gap between the button and each side of its view.
pub const BUTTON_INSET: u16 = 2;
pub const BUTTON_HEIGHT: u16 = 1;

/// Button bounds: vertically centred, inset by [`BUTTON_INSET`] on both sides.
pub fn button_rect(area: Rect) -> Rect {
    let width = area.width.saturating_sub(BUTTON_INSET * 2);
    let height = BUTTON_HEIGHT.min(area.height);
    Rect {
        x: area.x + BUTTON_INSET.min(area.width / 2),
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
