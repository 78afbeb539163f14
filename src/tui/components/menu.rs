use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::MenuItem;
use crate::core::window::window;
use crate::tui::component::Component;
use crate::tui::components::{marker, truncate_to_width};

/// The main menu. Long playlist collections scroll with the cursor.
pub struct Menu<'a> {
    pub items: &'a [MenuItem],
    pub cursor: usize,
}

impl<'a> Menu<'a> {
    pub fn new(items: &'a [MenuItem], cursor: usize) -> Self {
        Self { items, cursor }
    }
}

impl Component for Menu<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = usize::from(area.height);
        let (start, end) = window(self.cursor, self.items.len(), rows);
        let label_width = usize::from(area.width).saturating_sub(2);

        let lines: Vec<Line> = self.items[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| {
                let label = truncate_to_width(item.label(), label_width);
                let style = match item {
                    MenuItem::AddPlaylist => Style::default().fg(Color::Green),
                    MenuItem::Playlist { .. } => Style::default(),
                };
                Line::from(vec![
                    marker(start + offset == self.cursor),
                    Span::styled(label, style),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::menu_items;
    use crate::test_support::config_with;
    use crate::tui::components::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_menu_marks_cursor_row() {
        let items = menu_items(&config_with(&[("News", "n.m3u"), ("Sports", "s.m3u")]));
        let backend = TestBackend::new(30, 5);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Menu::new(&items, 1).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("  Add playlist"));
        assert!(lines[1].starts_with("➜ News"));
        assert!(lines[2].starts_with("  Sports"));
    }

    #[test]
    fn test_menu_scrolls_to_cursor() {
        let playlists: Vec<(String, String)> = (0..20)
            .map(|i| (format!("List {i}"), format!("{i}.m3u")))
            .collect();
        let refs: Vec<(&str, &str)> = playlists
            .iter()
            .map(|(n, p)| (n.as_str(), p.as_str()))
            .collect();
        let items = menu_items(&config_with(&refs));
        let backend = TestBackend::new(30, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Menu::new(&items, 20).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("➜ List 19"));
        assert!(!text.contains("Add playlist"));
    }
}
