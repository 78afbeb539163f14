//! # ChannelList Component
//!
//! Renders one screenful of channels around the cursor plus a footer:
//!
//! ```text
//!   ★ BBC
//! ➜   CNN
//!     Al Jazeera
//!
//! Showing 1-3 of 3 channels
//! ```
//!
//! The visible slice comes from `core::window::window` on every frame; no
//! scroll offset is stored anywhere.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::favourites::Favourites;
use crate::core::window::window;
use crate::playlist::Channel;
use crate::tui::component::Component;
use crate::tui::components::{marker, truncate_to_width};

/// Rows shown at once when the terminal is tall enough.
pub const WINDOW_SIZE: usize = 15;

pub struct ChannelList<'a> {
    pub channels: &'a [Channel],
    pub cursor: usize,
    /// When set, favourites of this playlist get a star column.
    pub stars: Option<(&'a Favourites, &'a str)>,
    /// Noun for the footer, e.g. "channels" or "favourites".
    pub noun: &'a str,
    /// Shown instead of rows when the list is empty.
    pub empty_text: &'a str,
}

impl<'a> ChannelList<'a> {
    pub fn new(channels: &'a [Channel], cursor: usize) -> Self {
        Self {
            channels,
            cursor,
            stars: None,
            noun: "channels",
            empty_text: "No channels found.",
        }
    }

    pub fn with_stars(mut self, favourites: &'a Favourites, playlist: &'a str) -> Self {
        self.stars = Some((favourites, playlist));
        self
    }

    pub fn noun(mut self, noun: &'a str) -> Self {
        self.noun = noun;
        self
    }

    pub fn empty_text(mut self, text: &'a str) -> Self {
        self.empty_text = text;
        self
    }

    fn row(&self, index: usize, channel: &Channel, width: usize) -> Line<'static> {
        let selected = index == self.cursor;
        let mut spans = vec![marker(selected)];
        let mut used = 2;
        if let Some((favourites, playlist)) = self.stars {
            let star = if favourites.contains(playlist, &channel.name) {
                Span::styled("★ ", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("  ")
            };
            spans.push(star);
            used += 2;
        }
        let name = truncate_to_width(&channel.name, width.saturating_sub(used));
        let style = if selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(name, style));
        Line::from(spans)
    }
}

impl Component for ChannelList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.channels.is_empty() {
            let empty = Paragraph::new(self.empty_text).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, area);
            return;
        }

        use Constraint::{Length, Min};
        let [rows_area, _gap, footer_area] =
            Layout::vertical([Min(0), Length(1), Length(1)]).areas(area);

        let size = WINDOW_SIZE.min(usize::from(rows_area.height));
        let (start, end) = window(self.cursor, self.channels.len(), size);
        let width = usize::from(rows_area.width);

        let lines: Vec<Line> = self.channels[start..end]
            .iter()
            .enumerate()
            .map(|(offset, channel)| self.row(start + offset, channel, width))
            .collect();
        frame.render_widget(Paragraph::new(lines), rows_area);

        let footer = if end > start {
            format!(
                "Showing {}-{} of {} {}",
                start + 1,
                end,
                self.channels.len(),
                self.noun
            )
        } else {
            format!("{} {}", self.channels.len(), self.noun)
        };
        frame.render_widget(
            Paragraph::new(footer).style(Style::default().fg(Color::DarkGray)),
            footer_area,
        );
    }
}
