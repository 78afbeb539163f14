use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::state::{FormField, PlaylistForm};
use crate::tui::component::Component;

const NAME_LABEL: &str = "Name: ";
const PATH_LABEL: &str = "File/URL: ";

/// The add playlist form. The focused field gets a `>` and the terminal cursor.
pub struct PlaylistFormView<'a> {
    pub form: &'a PlaylistForm,
}

impl<'a> PlaylistFormView<'a> {
    pub fn new(form: &'a PlaylistForm) -> Self {
        Self { form }
    }

    fn field_line(&self, field: FormField, label: &'static str, value: &str) -> Line<'static> {
        let focused = self.form.focus == field;
        let prefix = if focused { "> " } else { "  " };
        let label_style = if focused {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        Line::from(vec![
            Span::raw(prefix),
            Span::styled(label, label_style),
            Span::raw(value.to_string()),
        ])
    }
}

impl Component for PlaylistFormView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Add Playlist",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            self.field_line(FormField::Name, NAME_LABEL, &self.form.name),
            self.field_line(FormField::Path, PATH_LABEL, &self.form.path),
        ];
        if let Some(error) = &self.form.error {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                format!("[!] {error}"),
                Style::default().fg(Color::Red),
            )));
        }
        frame.render_widget(Paragraph::new(lines), area);

        let (row, label, value) = match self.form.focus {
            FormField::Name => (2, NAME_LABEL, &self.form.name),
            FormField::Path => (3, PATH_LABEL, &self.form.path),
        };
        let column = 2 + label.width() + value.width();
        if row < area.height {
            let x = area.x.saturating_add(column.min(usize::from(u16::MAX)) as u16);
            let x = x.min(area.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, area.y + row));
        }
    }
}
