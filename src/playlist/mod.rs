pub mod m3u;
pub mod source;

pub use m3u::{M3uSource, parse_m3u};
pub use source::{ChannelSource, PlaylistError};

/// A playable entry from a playlist. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub name: String,
    pub url: String,
}

impl Channel {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
