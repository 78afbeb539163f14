use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::{Status, StatusLevel};
use crate::tui::component::Component;

/// Bottom line: the transient status if there is one, otherwise key hints.
pub struct StatusBar<'a> {
    pub status: Option<&'a Status>,
    pub hints: &'a str,
}

impl<'a> StatusBar<'a> {
    pub fn new(status: Option<&'a Status>, hints: &'a str) -> Self {
        Self { status, hints }
    }
}

fn level_style(level: StatusLevel) -> Style {
    match level {
        StatusLevel::Info => Style::default().fg(Color::Green),
        StatusLevel::Warning => Style::default().fg(Color::Yellow),
        StatusLevel::Error => Style::default().fg(Color::Red),
    }
}

impl Component for StatusBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = match self.status {
            Some(status) => Span::styled(status.text.clone(), level_style(status.level)),
            None => Span::styled(self.hints.to_string(), Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(bar: &mut StatusBar) -> String {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_hints_when_no_status() {
        let text = render(&mut StatusBar::new(None, "[j/k] move  [enter] select"));
        assert!(text.contains("[j/k] move"));
    }

    #[test]
    fn test_status_replaces_hints() {
        let status = Status::error("Playback failed: vlc not found");
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| StatusBar::new(Some(&status), "[j/k] move").render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text = buffer_text(buffer);
        assert!(text.contains("Playback failed"));
        assert!(!text.contains("[j/k]"));
        assert_eq!(buffer[(0, 0)].fg, Color::Red);
    }
}
