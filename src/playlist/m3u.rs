//! M3U playlist loading.
//!
//! `#EXTINF` lines carry the display name of the entry that follows:
//!
//! ```text
//! #EXTM3U
//! #EXTINF:-1 tvg-id="bbc" group-title="News, UK",BBC News
//! http://example.com/bbc.m3u8
//! ```
//!
//! Other `#` lines are comments. Every remaining non-blank line is a stream URL.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::{Channel, ChannelSource, PlaylistError};

/// Parse M3U text into channels, in file order.
///
/// An entry with no preceding `#EXTINF` name is listed under its URL.
pub fn parse_m3u(content: &str) -> Vec<Channel> {
    let mut channels = Vec::new();
    let mut pending_name: Option<String> = None;
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("#EXTINF:") {
            pending_name = extinf_title(rest);
            continue;
        }

        if line.starts_with('#') {
            continue;
        }

        let url = line.to_string();
        let name = pending_name.take().unwrap_or_else(|| url.clone());
        channels.push(Channel { name, url });
    }

    channels
}

/// Title of an `#EXTINF` line: text after the first comma outside quotes.
fn extinf_title(rest: &str) -> Option<String> {
    let mut in_quotes = false;
    for (idx, c) in rest.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                let title = rest[idx + 1..].trim();
                return (!title.is_empty()).then(|| title.to_string());
            }
            _ => {}
        }
    }
    None
}

fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Loads M3U playlists from disk or over HTTP.
pub struct M3uSource {
    client: reqwest::Client,
}

impl Default for M3uSource {
    fn default() -> Self {
        Self::new()
    }
}

impl M3uSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    async fn fetch(&self, url: &str) -> Result<String, PlaylistError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| PlaylistError::Fetch(e.to_string()))?;

        debug!("Playlist response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            warn!("Playlist fetch failed: {} returned {}", url, status);
            return Err(PlaylistError::Http { status });
        }

        response
            .text()
            .await
            .map_err(|e| PlaylistError::Fetch(e.to_string()))
    }

    async fn read_file(&self, path: &str) -> Result<String, PlaylistError> {
        tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                PlaylistError::Parse(format!("{path} is not valid UTF-8"))
            } else {
                PlaylistError::Io(format!("{path}: {e}"))
            }
        })
    }
}

#[async_trait]
impl ChannelSource for M3uSource {
    async fn load_channels(&self, location: &str) -> Result<Vec<Channel>, PlaylistError> {
        let content = if is_remote(location) {
            self.fetch(location).await?
        } else {
            self.read_file(location).await?
        };
        let channels = parse_m3u(&content);
        info!("Loaded {} channels from {}", channels.len(), location);
        Ok(channels)
    }
}
