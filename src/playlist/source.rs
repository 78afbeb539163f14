use std::fmt;

use async_trait::async_trait;

use super::Channel;

/// Errors that can occur while loading a playlist.
#[derive(Debug)]
pub enum PlaylistError {
    /// Network-level failure (timeout, DNS, connection refused).
    Fetch(String),
    /// Server answered with a non-success status.
    Http { status: u16 },
    /// Local file could not be read.
    Io(String),
    /// Content is not a readable playlist (e.g. not UTF-8).
    Parse(String),
}

impl fmt::Display for PlaylistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistError::Fetch(msg) => write!(f, "fetch error: {msg}"),
            PlaylistError::Http { status } => write!(f, "server returned HTTP {status}"),
            PlaylistError::Io(msg) => write!(f, "I/O error: {msg}"),
            PlaylistError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for PlaylistError {}

/// Anything that can turn a playlist location into channels.
#[async_trait]
pub trait ChannelSource: Send + Sync {
    /// Load every channel from a local path or remote URL.
    async fn load_channels(&self, location: &str) -> Result<Vec<Channel>, PlaylistError>;
}
