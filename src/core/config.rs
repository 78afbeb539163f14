//! # Configuration
//!
//! One TOML file holds both user settings and the state vibecast persists
//! for the user (playlists and favourites). Settings follow the override
//! hierarchy: defaults → config file → env vars → CLI flags.
//!
//! Config lives at `<config dir>/vibecast/config.toml` unless overridden by
//! `--config` or `VIBECAST_CONFIG`. If missing on first run, a commented-out
//! template is generated so users can discover all options.
//!
//! Every mutation made in the UI is saved immediately. Writes go through a
//! `.tmp` file and `rename()` so a crash never leaves a half-written config.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::favourites::Favourites;

// ============================================================================
// Config Structs
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "PlayerConfig::is_empty")]
    pub player: PlayerConfig,
    #[serde(default)]
    pub playlists: Vec<PlaylistRef>,
    #[serde(default, skip_serializing_if = "Favourites::is_empty")]
    pub favourites: Favourites,
}

/// Player settings. All fields optional for sparse TOML.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rc_port: Option<u16>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra_args: Vec<String>,
}

impl PlayerConfig {
    fn is_empty(&self) -> bool {
        self.command.is_none() && self.rc_port.is_none() && self.extra_args.is_empty()
    }
}

/// A named channel source: a local M3U path or an http(s) URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaylistRef {
    pub name: String,
    pub path: String,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PLAYER_COMMAND: &str = "vlc";
pub const DEFAULT_RC_PORT: u16 = 4212;

// ============================================================================
// Resolved Player Settings (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSettings {
    pub command: String,
    pub rc_port: u16,
    pub extra_args: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Paths
// ============================================================================

/// Returns `<config dir>/vibecast/`, e.g. `~/.config/vibecast/` on Linux.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("vibecast"))
}

/// Resolves the config file path: CLI flag → `VIBECAST_CONFIG` → default.
pub fn config_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    cli_path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os("VIBECAST_CONFIG").map(PathBuf::from))
        .or_else(|| config_dir().map(|d| d.join("config.toml")))
}

// ============================================================================
// Loading / Saving
// ============================================================================

/// Load config from `path`.
///
/// A missing file is not an error: a commented template is written for
/// discoverability and an empty `Config` is returned. A file that exists but
/// does not parse returns `ConfigError::Parse`.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("No config file found, generating default at {}", path.display());
            generate_default_config(path);
            return Ok(Config::default());
        }
        Err(e) => return Err(ConfigError::Io(e)),
    };

    let mut config = parse_config(&contents)?;
    config.favourites.prune();
    info!(
        "Loaded config from {} ({} playlists)",
        path.display(),
        config.playlists.len()
    );
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Atomically replace the config file at `path` (via `.tmp` + rename).
pub fn save_config(path: &Path, config: &Config) -> Result<(), ConfigError> {
    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(ConfigError::Io)?;
    }
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents).map_err(ConfigError::Io)?;
    fs::rename(&tmp_path, path).map_err(ConfigError::Io)?;
    debug!("Config saved to {}", path.display());
    Ok(())
}

/// Generates a commented-out template at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Vibecast Configuration
# Playlists and favourites are managed from the app and saved here.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [player]
# command = "vlc"                    # Or set VIBECAST_PLAYER env var
# rc_port = 4212                     # Local port for VLC's remote control interface
# extra_args = ["--no-video"]

# [[playlists]]
# name = "News"
# path = "https://example.com/news.m3u"   # http(s) URL or local file

# [favourites]
# News = ["BBC", "CNN"]
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve player settings: defaults → config file → `VIBECAST_PLAYER`.
pub fn resolve_player(config: &Config) -> PlayerSettings {
    let command = std::env::var("VIBECAST_PLAYER")
        .ok()
        .filter(|c| !c.trim().is_empty())
        .or_else(|| config.player.command.clone())
        .unwrap_or_else(|| DEFAULT_PLAYER_COMMAND.to_string());

    PlayerSettings {
        command,
        rc_port: config.player.rc_port.unwrap_or(DEFAULT_RC_PORT),
        extra_args: config.player.extra_args.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_empty() {
        let config = Config::default();
        assert!(config.playlists.is_empty());
        assert!(config.favourites.is_empty());
        assert!(config.player.command.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let settings = resolve_player(&Config::default());
        assert_eq!(settings.rc_port, DEFAULT_RC_PORT);
        assert!(settings.extra_args.is_empty());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = Config {
            player: PlayerConfig {
                command: Some("/opt/vlc/bin/vlc".to_string()),
                rc_port: Some(5000),
                extra_args: vec!["--no-video".to_string()],
            },
            ..Default::default()
        };
        let settings = resolve_player(&config);
        assert_eq!(settings.rc_port, 5000);
        assert_eq!(settings.extra_args, vec!["--no-video"]);
    }

    #[test]
    fn test_full_toml_parses() {
        let toml_str = r#"
[player]
command = "cvlc"
rc_port = 4300

[[playlists]]
name = "News"
path = "https://example.com/news.m3u"

[[playlists]]
name = "Local"
path = "/home/me/tv.m3u"

[favourites]
News = ["BBC", "CNN"]
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.player.command.as_deref(), Some("cvlc"));
        assert_eq!(config.player.rc_port, Some(4300));
        assert_eq!(config.playlists.len(), 2);
        assert_eq!(config.playlists[1].path, "/home/me/tv.m3u");
        assert!(config.favourites.contains("News", "CNN"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[[playlists]]
name = "News"
path = "news.m3u"
"#;
        let config = parse_config(toml_str).unwrap();
        assert_eq!(config.playlists.len(), 1);
        assert!(config.player.command.is_none());
        assert!(config.favourites.is_empty());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let result = parse_config("[[playlists]]\nname = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_serialized_config_reparses() {
        let mut config = Config::default();
        config.playlists.push(PlaylistRef {
            name: "News".to_string(),
            path: "news.m3u".to_string(),
        });
        config.favourites.add("News", "BBC");
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(!text.contains("[player]"));
        assert_eq!(parse_config(&text).unwrap(), config);
    }

    #[test]
    fn test_cli_path_wins() {
        let path = config_path(Some(Path::new("/tmp/custom.toml")));
        assert_eq!(path, Some(PathBuf::from("/tmp/custom.toml")));
    }
}
