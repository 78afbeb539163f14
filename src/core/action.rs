//! # Actions
//!
//! Everything that can happen in vibecast becomes an `Action`.
//! User presses Enter? That's `Action::Select`.
//! A playlist finishes downloading? That's `Action::PlaylistLoaded { .. }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state, and returns the `Effect`s the runtime should carry out
//! (save the config, load a playlist, start playback). No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + [Effect]
//!                                               │
//!              runtime runs it, result comes back as another Action
//! ```
//!
//! This makes everything testable: drive `update` with actions and assert
//! on the resulting mode and effects.

use log::debug;

use crate::core::config::{Config, PlaylistRef};
use crate::core::search;
use crate::core::state::{
    App, ChannelView, FavouritesView, FormField, LoadState, MenuItem, MenuState, Mode,
    PlaylistForm, SearchView, Status, favourite_channels, menu_items,
};
use crate::playlist::Channel;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // User input
    Up,
    Down,
    Select,
    Back,
    ToggleFavourite,
    ToggleSearch,
    ShowFavourites,
    Text(char),
    DeleteChar,
    SwitchField,
    Quit,

    // Results from the runtime
    PlaylistLoaded {
        generation: u64,
        result: Result<Vec<Channel>, String>,
    },
    ConfigSaved(Result<(), String>),
    PlaybackStarted {
        name: String,
        result: Result<(), String>,
    },
}

impl Action {
    /// True for key-driven actions; false for results fed back by the runtime.
    pub fn is_input(&self) -> bool {
        !matches!(
            self,
            Action::PlaylistLoaded { .. } | Action::ConfigSaved(_) | Action::PlaybackStarted { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Quit,
    LoadPlaylist { generation: u64, location: String },
    CancelLoad,
    SaveConfig(Config),
    Play { name: String, url: String },
}

pub fn update(app: &mut App, action: Action) -> Vec<Effect> {
    debug!("update: mode={} action={:?}", app.mode.name(), action);

    if action.is_input() {
        app.status = None;
    }

    match action {
        Action::Quit => {
            app.should_quit = true;
            return vec![Effect::Quit];
        }
        Action::PlaylistLoaded { generation, result } => {
            apply_playlist_load(app, generation, result);
            return Vec::new();
        }
        Action::ConfigSaved(result) => {
            if let Err(e) = result {
                app.status = Some(Status::warning(format!("Could not save config: {e}")));
            }
            return Vec::new();
        }
        Action::PlaybackStarted { name, result } => {
            app.status = Some(match result {
                Ok(()) => Status::info(format!("Playing {name}")),
                Err(e) => Status::error(format!("Playback failed: {e}")),
            });
            return Vec::new();
        }
        _ => {}
    }

    let previous = app.mode.name();
    let (mode, effects) = match std::mem::take(&mut app.mode) {
        Mode::Menu(menu) => update_menu(app, menu, action),
        Mode::AddPlaylist(form) => update_add_playlist(app, form, action),
        Mode::ChannelList(view) => update_channel_list(app, view, action),
        Mode::SearchInput(search) => update_search_input(search, action),
        Mode::SearchBrowse(search) => update_search_browse(app, search, action),
        Mode::FavouritesList(favs) => update_favourites(app, favs, action),
    };
    if mode.name() != previous {
        debug!("transition: {} -> {}", previous, mode.name());
    }
    app.mode = mode;
    effects
}

// ============================================================================
// Cursor helpers
// ============================================================================

fn move_up(cursor: &mut usize) {
    *cursor = cursor.saturating_sub(1);
}

fn move_down(cursor: &mut usize, len: usize) {
    if *cursor + 1 < len {
        *cursor += 1;
    }
}

/// Largest valid cursor for a list of `len` items (0 when empty).
fn clamp(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}

fn play(channel: Option<&Channel>) -> Vec<Effect> {
    channel
        .map(|c| Effect::Play {
            name: c.name.clone(),
            url: c.url.clone(),
        })
        .into_iter()
        .collect()
}

fn save(config: &Config) -> Vec<Effect> {
    vec![Effect::SaveConfig(config.clone())]
}

// ============================================================================
// Menu
// ============================================================================

fn update_menu(app: &mut App, mut menu: MenuState, action: Action) -> (Mode, Vec<Effect>) {
    let items = menu_items(&app.config);
    match action {
        Action::Up => move_up(&mut menu.cursor),
        Action::Down => move_down(&mut menu.cursor, items.len()),
        Action::Select => match items.get(menu.cursor) {
            Some(MenuItem::AddPlaylist) => {
                return (Mode::AddPlaylist(PlaylistForm::default()), Vec::new());
            }
            Some(MenuItem::Playlist { index, .. }) => return open_playlist(app, *index),
            None => {}
        },
        _ => {}
    }
    menu.cursor = clamp(menu.cursor, items.len());
    (Mode::Menu(menu), Vec::new())
}

fn open_playlist(app: &mut App, index: usize) -> (Mode, Vec<Effect>) {
    let Some(playlist) = app.config.playlists.get(index).cloned() else {
        return (Mode::Menu(MenuState { cursor: 0 }), Vec::new());
    };
    let generation = app.next_generation();
    let view = ChannelView {
        playlist_index: index,
        playlist_name: playlist.name,
        channels: Vec::new(),
        cursor: 0,
        load: LoadState::Loading { generation },
    };
    (
        Mode::ChannelList(view),
        vec![Effect::LoadPlaylist {
            generation,
            location: playlist.path,
        }],
    )
}

/// Applies a finished load if the current channel list is waiting for it.
/// Anything else is a stale result from a list the user already left.
fn apply_playlist_load(app: &mut App, generation: u64, result: Result<Vec<Channel>, String>) {
    let Mode::ChannelList(view) = &mut app.mode else {
        debug!("Discarding playlist load {generation}: no channel list open");
        return;
    };
    if view.load != (LoadState::Loading { generation }) {
        debug!("Discarding stale playlist load {generation}");
        return;
    }
    view.cursor = 0;
    match result {
        Ok(channels) => {
            view.channels = channels;
            view.load = LoadState::Ready;
        }
        Err(e) => {
            view.channels = Vec::new();
            view.load = LoadState::Failed(format!("Failed to load playlist: {e}"));
        }
    }
}

// ============================================================================
// Add playlist form
// ============================================================================

fn update_add_playlist(
    app: &mut App,
    mut form: PlaylistForm,
    action: Action,
) -> (Mode, Vec<Effect>) {
    match action {
        Action::SwitchField => form.focus = form.focus.other(),
        Action::Up => form.focus = FormField::Name,
        Action::Down => form.focus = FormField::Path,
        Action::Text(c) => form.focused_mut().push(c),
        Action::DeleteChar => {
            form.focused_mut().pop();
        }
        Action::Back => {
            let cursor = usize::from(!app.config.playlists.is_empty());
            return (Mode::Menu(MenuState { cursor }), Vec::new());
        }
        Action::Select => match validate_form(&form, &app.config) {
            Ok(playlist) => {
                app.config.playlists.push(playlist);
                // The new playlist is the last menu entry.
                let cursor = app.config.playlists.len();
                return (Mode::Menu(MenuState { cursor }), save(&app.config));
            }
            Err(msg) => form.error = Some(msg),
        },
        _ => {}
    }
    (Mode::AddPlaylist(form), Vec::new())
}

fn validate_form(form: &PlaylistForm, config: &Config) -> Result<PlaylistRef, String> {
    let name = form.name.trim();
    let path = form.path.trim();
    match (name.is_empty(), path.is_empty()) {
        (true, true) => return Err("Both fields are required".to_string()),
        (true, false) => return Err("Name is required".to_string()),
        (false, true) => return Err("File/URL is required".to_string()),
        (false, false) => {}
    }
    if config.playlists.iter().any(|p| p.name == name) {
        return Err(format!("A playlist named \"{name}\" already exists"));
    }
    Ok(PlaylistRef {
        name: name.to_string(),
        path: path.to_string(),
    })
}

// ============================================================================
// Channel list
// ============================================================================

fn update_channel_list(
    app: &mut App,
    mut view: ChannelView,
    action: Action,
) -> (Mode, Vec<Effect>) {
    match action {
        Action::Up => move_up(&mut view.cursor),
        Action::Down => move_down(&mut view.cursor, view.channels.len()),
        Action::Select => {
            if view.load == LoadState::Ready {
                let effects = play(view.channels.get(view.cursor));
                return (Mode::ChannelList(view), effects);
            }
        }
        Action::ToggleFavourite => {
            if let Some(channel) = view.channels.get(view.cursor) {
                app.config
                    .favourites
                    .toggle(&view.playlist_name, &channel.name);
                return (Mode::ChannelList(view), save(&app.config));
            }
        }
        Action::ToggleSearch if !view.is_loading() => {
            let search = SearchView {
                query: String::new(),
                filtered: view.channels.clone(),
                cursor: clamp(view.cursor, view.channels.len()),
                base: view,
            };
            return (Mode::SearchInput(search), Vec::new());
        }
        Action::ShowFavourites if !view.is_loading() => {
            let channels =
                favourite_channels(&view.channels, &app.config.favourites, &view.playlist_name);
            let favs = FavouritesView {
                channels,
                cursor: 0,
                base: view,
            };
            return (Mode::FavouritesList(favs), Vec::new());
        }
        Action::Back => {
            let effects = if view.is_loading() {
                vec![Effect::CancelLoad]
            } else {
                Vec::new()
            };
            let cursor = view.playlist_index + 1;
            return (Mode::Menu(MenuState { cursor }), effects);
        }
        _ => {}
    }
    view.cursor = clamp(view.cursor, view.channels.len());
    (Mode::ChannelList(view), Vec::new())
}

// ============================================================================
// Search
// ============================================================================

fn refilter(search: &mut SearchView) {
    search.filtered = search::filter(&search.base.channels, &search.query);
    search.cursor = clamp(search.cursor, search.filtered.len());
}

fn update_search_input(mut search: SearchView, action: Action) -> (Mode, Vec<Effect>) {
    match action {
        Action::Text(c) => {
            search.query.push(c);
            refilter(&mut search);
        }
        Action::DeleteChar => {
            search.query.pop();
            refilter(&mut search);
        }
        Action::Up => move_up(&mut search.cursor),
        Action::Down => move_down(&mut search.cursor, search.filtered.len()),
        Action::Select => {
            let effects = play(search.filtered.get(search.cursor));
            return (Mode::SearchInput(search), effects);
        }
        Action::Back => {
            if search.query.is_empty() {
                return (Mode::ChannelList(search.base), Vec::new());
            }
            return (Mode::SearchBrowse(search), Vec::new());
        }
        _ => {}
    }
    (Mode::SearchInput(search), Vec::new())
}

fn update_search_browse(
    app: &mut App,
    mut search: SearchView,
    action: Action,
) -> (Mode, Vec<Effect>) {
    match action {
        Action::Up => move_up(&mut search.cursor),
        Action::Down => move_down(&mut search.cursor, search.filtered.len()),
        Action::Select => {
            let effects = play(search.filtered.get(search.cursor));
            return (Mode::SearchBrowse(search), effects);
        }
        Action::ToggleFavourite => {
            if let Some(channel) = search.filtered.get(search.cursor) {
                app.config
                    .favourites
                    .toggle(&search.base.playlist_name, &channel.name);
                return (Mode::SearchBrowse(search), save(&app.config));
            }
        }
        Action::ToggleSearch => return (Mode::SearchInput(search), Vec::new()),
        Action::Back => return (Mode::ChannelList(search.base), Vec::new()),
        _ => {}
    }
    (Mode::SearchBrowse(search), Vec::new())
}

// ============================================================================
// Favourites
// ============================================================================

fn update_favourites(
    app: &mut App,
    mut favs: FavouritesView,
    action: Action,
) -> (Mode, Vec<Effect>) {
    match action {
        Action::Up => move_up(&mut favs.cursor),
        Action::Down => move_down(&mut favs.cursor, favs.channels.len()),
        Action::Select => {
            let effects = play(favs.channels.get(favs.cursor));
            return (Mode::FavouritesList(favs), effects);
        }
        Action::ToggleFavourite => {
            if let Some(channel) = favs.channels.get(favs.cursor) {
                let name = channel.name.clone();
                app.config
                    .favourites
                    .remove(&favs.base.playlist_name, &name);
                // Same-named channels share one favourite entry.
                favs.channels.retain(|c| c.name != name);
                favs.cursor = clamp(favs.cursor, favs.channels.len());
                return (Mode::FavouritesList(favs), save(&app.config));
            }
        }
        Action::Back => return (Mode::ChannelList(favs.base), Vec::new()),
        _ => {}
    }
    (Mode::FavouritesList(favs), Vec::new())
}
