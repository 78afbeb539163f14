//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Every component here is stateless: it borrows what it shows from `App`
//! for the duration of one frame and renders it.
//!
//! - `TitleBar`: App name and where you are
//! - `Menu`: "Add playlist" plus the configured playlists
//! - `PlaylistFormView`: The two-field add playlist form
//! - `ChannelList`: Windowed channel rows with a "Showing a-b of n" footer
//! - `StatusBar`: Key hints, or the transient status when there is one
//!
//! ### Props-Based Data Flow
//!
//! Components receive external data as "props" (struct fields), not by
//! reaching into global state. This makes dependencies explicit and
//! components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! StatusBar::new(app.status.as_ref(), hints).render(frame, area);
//!
//! // Bad: Hidden dependency on global state
//! status_bar.render(frame, area); // reads from global App
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top line)
//! ├── menu.rs           (Main menu)
//! ├── playlist_form.rs  (Add playlist form)
//! ├── channel_list.rs   (Windowed channel list)
//! └── status_bar.rs     (Bottom line)
//! ```

mod channel_list;
mod menu;
mod playlist_form;
mod status_bar;
mod title_bar;

pub use channel_list::ChannelList;
pub use menu::Menu;
pub use playlist_form::PlaylistFormView;
pub use status_bar::StatusBar;
pub use title_bar::TitleBar;

use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker in front of the highlighted row.
pub(crate) const CURSOR_MARKER: &str = "➜ ";
pub(crate) const NO_MARKER: &str = "  ";

/// The row prefix for a list entry.
pub(crate) fn marker(selected: bool) -> Span<'static> {
    if selected {
        Span::styled(CURSOR_MARKER, Style::default().add_modifier(Modifier::REVERSED))
    } else {
        Span::raw(NO_MARKER)
    }
}

/// Truncate `s` to at most `max_width` terminal columns, ending in "…" when cut.
pub(crate) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let budget = max_width - 1;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("BBC", 10), "BBC");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Al Jazeera English", 8), "Al Jaze…");
        assert_eq!(truncate_to_width("Al Jazeera English", 8).width(), 8);
    }

    #[test]
    fn test_truncate_wide_chars() {
        // Each CJK character is two columns wide.
        let cut = truncate_to_width("日本テレビ", 6);
        assert_eq!(cut, "日本…");
        assert!(cut.width() <= 6);
    }

    #[test]
    fn test_truncate_zero_width() {
        assert_eq!(truncate_to_width("BBC", 0), "");
    }
}
