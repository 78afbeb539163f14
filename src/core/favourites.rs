//! # Favourites
//!
//! Per-playlist sets of favourited channel names. Channels are identified
//! by display name only, so two channels sharing a name share a star.
//!
//! Stored in the config file as a table of arrays:
//!
//! ```toml
//! [favourites]
//! News = ["BBC", "CNN"]
//! ```
//!
//! Empty sets are never kept. `remove` drops a playlist's entry once its
//! last name goes, and [`Favourites::prune`] cleans maps read from disk.
//! With a single canonical form, toggling twice gives back an equal map.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favourites(BTreeMap<String, Vec<String>>);

impl Favourites {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `channel` to `playlist`'s set. Already present is a no-op.
    pub fn add(&mut self, playlist: &str, channel: &str) {
        let names = self.0.entry(playlist.to_string()).or_default();
        if !names.iter().any(|n| n == channel) {
            names.push(channel.to_string());
        }
    }

    /// Removes `channel` from `playlist`'s set. Absent is a no-op.
    pub fn remove(&mut self, playlist: &str, channel: &str) {
        if let Some(names) = self.0.get_mut(playlist) {
            names.retain(|n| n != channel);
            if names.is_empty() {
                self.0.remove(playlist);
            }
        }
    }

    pub fn contains(&self, playlist: &str, channel: &str) -> bool {
        self.0
            .get(playlist)
            .is_some_and(|names| names.iter().any(|n| n == channel))
    }

    /// Flips membership and returns whether the channel is now a favourite.
    pub fn toggle(&mut self, playlist: &str, channel: &str) -> bool {
        if self.contains(playlist, channel) {
            self.remove(playlist, channel);
            false
        } else {
            self.add(playlist, channel);
            true
        }
    }

    /// Favourited names for a playlist, in insertion order.
    pub fn names_for(&self, playlist: &str) -> &[String] {
        self.0.get(playlist).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Normalizes a map read from disk: drops duplicate names and empty sets.
    pub fn prune(&mut self) {
        for names in self.0.values_mut() {
            let mut seen = Vec::with_capacity(names.len());
            names.retain(|n| {
                if seen.contains(n) {
                    false
                } else {
                    seen.push(n.clone());
                    true
                }
            });
        }
        self.0.retain(|_, names| !names.is_empty());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
