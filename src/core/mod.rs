//! # Core Application Logic
//!
//! This module contains vibecast's navigation logic.
//! It knows nothing about terminals, sockets or media players.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (modes, data)  │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │  Playlist  │      │   Player   │
//!     │  Adapter   │      │   loader   │      │  gateway   │
//!     │ (ratatui)  │      │ (reqwest)  │      │   (VLC)    │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the `Mode` each screen lives in
//! - [`action`]: The `Action` and `Effect` enums and the `update` reducer
//! - [`config`]: Persisted playlists, favourites and player settings
//! - [`favourites`]: Per-playlist favourite channel names
//! - [`search`]: Fuzzy channel filtering
//! - [`window`]: Which slice of a long list is visible

pub mod action;
pub mod config;
pub mod favourites;
pub mod search;
pub mod state;
pub mod window;
