//! # TitleBar Component
//!
//! Top line showing the app name and the current screen:
//!
//! 1. **With context**: `"Vibecast | Playlist: News"`
//! 2. **Default**: `"Vibecast"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Where the user is, e.g. "Playlist: News". Empty on the menu.
    pub context: String,
}

impl TitleBar {
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![Span::styled(
            "Vibecast",
            Style::default().add_modifier(Modifier::BOLD),
        )];
        if !self.context.is_empty() {
            spans.push(Span::raw(format!(" | {}", self.context)));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
