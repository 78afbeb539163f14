//! # Player Gateway
//!
//! The boundary between vibecast and the external media player. The
//! runtime owns exactly one gateway inside a dedicated task; the core only
//! ever asks for playback through `Effect::Play`.

pub mod vlc;

use std::fmt;

use async_trait::async_trait;

pub use vlc::VlcPlayer;

/// Errors that can occur while driving the player.
#[derive(Debug)]
pub enum PlayerError {
    /// The player binary is not installed or not on `PATH`.
    NotFound(String),
    /// The process could not be started.
    Spawn(String),
    /// The control interface never came up.
    Connect(String),
    /// The process died before accepting commands.
    Exited(String),
    /// Sending a command failed.
    Io(String),
}

impl fmt::Display for PlayerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerError::NotFound(cmd) => {
                write!(f, "{cmd} not found. Install VLC or set [player] command in the config")
            }
            PlayerError::Spawn(msg) => write!(f, "failed to start player: {msg}"),
            PlayerError::Connect(msg) => write!(f, "could not reach player: {msg}"),
            PlayerError::Exited(msg) => write!(f, "player exited: {msg}"),
            PlayerError::Io(msg) => write!(f, "player I/O error: {msg}"),
        }
    }
}

impl std::error::Error for PlayerError {}

#[async_trait]
pub trait PlayerGateway: Send {
    /// Returns the name of the player.
    fn name(&self) -> &str;

    /// Start playing `url`, replacing whatever is playing now.
    async fn play(&mut self, url: &str) -> Result<(), PlayerError>;

    /// Shut the player down. Safe to call when nothing is running.
    async fn stop(&mut self) -> Result<(), PlayerError>;
}
