//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::action::{Action, Effect, update};
use crate::core::config::{Config, PlaylistRef};
use crate::core::state::App;
use crate::playlist::Channel;

/// Channels named `names`, each with a URL derived from its name.
pub fn channels(names: &[&str]) -> Vec<Channel> {
    names
        .iter()
        .map(|name| {
            let slug = name.to_lowercase().replace(' ', "-");
            Channel::new(*name, format!("http://example.com/{slug}"))
        })
        .collect()
}

/// A config holding the given `(name, path)` playlists and nothing else.
pub fn config_with(playlists: &[(&str, &str)]) -> Config {
    Config {
        playlists: playlists
            .iter()
            .map(|(name, path)| PlaylistRef {
                name: name.to_string(),
                path: path.to_string(),
            })
            .collect(),
        ..Config::default()
    }
}

/// An app showing playlist `index` with `list` already loaded.
pub fn loaded_app(playlists: &[(&str, &str)], index: usize, list: Vec<Channel>) -> App {
    let mut app = App::new(config_with(playlists));
    for _ in 0..=index {
        update(&mut app, Action::Down);
    }
    let effects = update(&mut app, Action::Select);
    let Some(Effect::LoadPlaylist { generation, .. }) = effects.into_iter().next() else {
        panic!("selecting a playlist should request a load");
    };
    update(
        &mut app,
        Action::PlaylistLoaded {
            generation,
            result: Ok(list),
        },
    );
    app
}

/// The "News" playlist with BBC, CNN and Al Jazeera loaded.
pub fn news_app() -> App {
    loaded_app(
        &[("News", "news.m3u")],
        0,
        channels(&["BBC", "CNN", "Al Jazeera"]),
    )
}
