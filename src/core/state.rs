//! # Application State
//!
//! Everything the UI shows comes from here. This module contains domain
//! logic only, no terminal types.
//!
//! ```text
//! App
//! ├── config: Config          // playlists + favourites (persisted)
//! ├── mode: Mode              // current screen and its local data
//! ├── status: Option<Status>  // transient line, cleared on next key
//! ├── should_quit: bool
//! └── load_generation: u64    // stamps playlist loads
//! ```
//!
//! `Mode` is a tagged union: each screen carries only its own data, so a
//! screen can never read leftovers from the one before it. Screens that sit
//! on top of a channel list (search, favourites) own the `ChannelView` they
//! will return to.
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::config::Config;
use crate::core::favourites::Favourites;
use crate::playlist::Channel;

pub struct App {
    pub config: Config,
    pub mode: Mode,
    pub status: Option<Status>,
    pub should_quit: bool,
    load_generation: u64,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            mode: Mode::default(),
            status: None,
            should_quit: false,
            load_generation: 0,
        }
    }

    /// Hands out a fresh stamp for a playlist load request.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.load_generation += 1;
        self.load_generation
    }

    /// Items for the main menu, always derived from the current config.
    pub fn menu_items(&self) -> Vec<MenuItem> {
        menu_items(&self.config)
    }
}

// ============================================================================
// Modes
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Menu(MenuState),
    AddPlaylist(PlaylistForm),
    ChannelList(ChannelView),
    SearchInput(SearchView),
    SearchBrowse(SearchView),
    FavouritesList(FavouritesView),
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Menu(MenuState::default())
    }
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Menu(_) => "menu",
            Mode::AddPlaylist(_) => "add-playlist",
            Mode::ChannelList(_) => "channel-list",
            Mode::SearchInput(_) => "search-input",
            Mode::SearchBrowse(_) => "search-browse",
            Mode::FavouritesList(_) => "favourites",
        }
    }

    /// True when printable keys should be treated as text.
    pub fn accepts_text(&self) -> bool {
        matches!(self, Mode::AddPlaylist(_) | Mode::SearchInput(_))
    }

    /// Cursor position within the mode's list, if it has one.
    #[cfg(test)]
    pub fn cursor(&self) -> Option<usize> {
        match self {
            Mode::Menu(menu) => Some(menu.cursor),
            Mode::AddPlaylist(_) => None,
            Mode::ChannelList(view) => Some(view.cursor),
            Mode::SearchInput(search) | Mode::SearchBrowse(search) => Some(search.cursor),
            Mode::FavouritesList(favs) => Some(favs.cursor),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuState {
    pub cursor: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    AddPlaylist,
    Playlist { index: usize, name: String },
}

impl MenuItem {
    pub fn label(&self) -> &str {
        match self {
            MenuItem::AddPlaylist => "Add playlist",
            MenuItem::Playlist { name, .. } => name,
        }
    }
}

/// "Add playlist" first, then one entry per configured playlist.
pub fn menu_items(config: &Config) -> Vec<MenuItem> {
    std::iter::once(MenuItem::AddPlaylist)
        .chain(
            config
                .playlists
                .iter()
                .enumerate()
                .map(|(index, playlist)| MenuItem::Playlist {
                    index,
                    name: playlist.name.clone(),
                }),
        )
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Name,
    Path,
}

impl FormField {
    pub fn other(self) -> Self {
        match self {
            FormField::Name => FormField::Path,
            FormField::Path => FormField::Name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistForm {
    pub name: String,
    pub path: String,
    pub focus: FormField,
    pub error: Option<String>,
}

impl PlaylistForm {
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            FormField::Name => &mut self.name,
            FormField::Path => &mut self.path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading { generation: u64 },
    Ready,
    Failed(String),
}

/// A loaded (or loading) playlist.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelView {
    pub playlist_index: usize,
    pub playlist_name: String,
    pub channels: Vec<Channel>,
    pub cursor: usize,
    pub load: LoadState,
}

impl ChannelView {
    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading { .. })
    }

    pub fn load_error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }
}

/// Search over a channel list. `filtered` is a cache of
/// `search::filter(&base.channels, &query)` and is rebuilt on every edit.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub base: ChannelView,
    pub query: String,
    pub filtered: Vec<Channel>,
    pub cursor: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FavouritesView {
    pub base: ChannelView,
    pub channels: Vec<Channel>,
    pub cursor: usize,
}

/// Channels of `channels` favourited under `playlist`, in list order.
pub fn favourite_channels(
    channels: &[Channel],
    favourites: &Favourites,
    playlist: &str,
) -> Vec<Channel> {
    let names = favourites.names_for(playlist);
    channels
        .iter()
        .filter(|c| names.contains(&c.name))
        .cloned()
        .collect()
}

// ============================================================================
// Status line
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub level: StatusLevel,
    pub text: String,
}

impl Status {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Info, text: text.into() }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Warning, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Error, text: text.into() }
    }
}
