//! Key bindings per mode.
//!
//! ```text
//! key        menu     form          channels    search     browse     favourites
//! ─────────  ───────  ────────────  ──────────  ─────────  ─────────  ──────────
//! j / ↓      down     text / down   down        text/down  down       down
//! k / ↑      up       text / up     up          text/up    up         up
//! enter      select   submit        play        play       play       play
//! esc        -        cancel        menu        browse     list       list
//! /          -        text          search      text       search     -
//! m          -        text          mark        text       mark       unmark
//! b          -        text          favourites  text       -          -
//! tab        -        switch field  -           -          -          -
//! q          quit     text          -           text       -          -
//! ctrl+c     quit everywhere
//! ```
//!
//! In the form and the search box letters are text, so only the arrow keys
//! move there.

use crate::core::action::Action;
use crate::core::state::Mode;
use crate::tui::event::TuiEvent;

pub fn to_action(mode: &Mode, event: TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        TuiEvent::Up => return Some(Action::Up),
        TuiEvent::Down => return Some(Action::Down),
        TuiEvent::Enter => return Some(Action::Select),
        TuiEvent::Escape => return Some(Action::Back),
        _ => {}
    }

    if mode.accepts_text() {
        return match event {
            TuiEvent::Char(c) => Some(Action::Text(c)),
            TuiEvent::Backspace => Some(Action::DeleteChar),
            TuiEvent::Tab => Some(Action::SwitchField),
            _ => None,
        };
    }

    let TuiEvent::Char(c) = event else {
        return None;
    };
    match (mode, c) {
        (_, 'j') => Some(Action::Down),
        (_, 'k') => Some(Action::Up),
        (Mode::Menu(_), 'q') => Some(Action::Quit),
        (Mode::ChannelList(_) | Mode::SearchBrowse(_), '/') => Some(Action::ToggleSearch),
        (Mode::ChannelList(_) | Mode::SearchBrowse(_) | Mode::FavouritesList(_), 'm') => {
            Some(Action::ToggleFavourite)
        }
        (Mode::ChannelList(_), 'b') => Some(Action::ShowFavourites),
        _ => None,
    }
}
