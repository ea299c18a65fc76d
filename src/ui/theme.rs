use ratatui::style::Color;

pub const VIEW_BACKGROUND: Color = Color::Rgb(0xff, 0xff, 0xff);
pub const BUTTON_BACKGROUND: Color = Color::Rgb(0x00, 0x00, 0x00);
pub const BUTTON_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
