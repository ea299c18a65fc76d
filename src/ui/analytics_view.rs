//! The analytics screen: a single button whose title comes from a [`ViewModel`].

use std::any::Any;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::layout::button_rect;
use crate::ui::theme::{BUTTON_BACKGROUND, BUTTON_TEXT, VIEW_BACKGROUND};
use crate::ui::view::View;

/// Capability of a view that can show an analytics button.
pub trait DisplaysAnalyticsView: View {
    /// Sets the button title to `view_model.button_title`.
    fn configure(&mut self, view_model: ViewModel);
}

/// Data needed to configure the analytics button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewModel {
    /// Button text.
    pub button_title: String,
}

impl ViewModel {
    pub fn new(button_title: impl Into<String>) -> Self {
        Self {
            button_title: button_title.into(),
        }
    }
}

/// Default analytics view: white background with a black button.
#[derive(Debug, Default)]
pub struct AnalyticsView {
    button_title: String,
}

impl AnalyticsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restoring from an archived interface description is unsupported.
    /// Never called in practice.
    pub fn from_archive(_archive: &[u8]) -> Self {
        unimplemented!("AnalyticsView cannot be restored from an archive")
    }

    /// Text currently shown on the button.
    pub fn button_title(&self) -> &str {
        &self.button_title
    }
}

impl Widget for &AnalyticsView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Block::default()
            .style(Style::default().bg(VIEW_BACKGROUND))
            .render(area, buf);

        let button = button_rect(area);
        if button.is_empty() {
            return;
        }

        Paragraph::new(self.button_title.as_str())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(BUTTON_BACKGROUND)
                    .fg(BUTTON_TEXT)
                    .add_modifier(Modifier::BOLD),
            )
            .render(button, buf);
    }
}

impl View for AnalyticsView {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        <&AnalyticsView as Widget>::render(self, area, buf);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl DisplaysAnalyticsView for AnalyticsView {
    fn configure(&mut self, view_model: ViewModel) {
        self.button_title = view_model.button_title;
    }
}
