use vibecast::core::config::{Config, ConfigError, PlaylistRef, load_config, save_config};

fn sample_config() -> Config {
    let mut config = Config::default();
    config.playlists.push(PlaylistRef {
        name: "News".to_string(),
        path: "https://example.com/news.m3u".to_string(),
    });
    config.playlists.push(PlaylistRef {
        name: "Local".to_string(),
        path: "/srv/iptv/local.m3u".to_string(),
    });
    config.favourites.add("News", "BBC");
    config.favourites.add("News", "CNN");
    config.player.rc_port = Some(4300);
    config
}

#[test]
fn test_save_then_load_restores_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vibecast").join("config.toml");

    let config = sample_config();
    save_config(&path, &config).unwrap();
    let loaded = load_config(&path).unwrap();

    assert_eq!(loaded, config);
    assert!(!path.with_extension("tmp").exists());
}

#[test]
fn test_save_replaces_previous_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    save_config(&path, &sample_config()).unwrap();
    save_config(&path, &Config::default()).unwrap();

    assert_eq!(load_config(&path).unwrap(), Config::default());
}

#[test]
fn test_missing_file_gives_empty_config_and_template() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh").join("config.toml");

    let config = load_config(&path).unwrap();

    assert_eq!(config, Config::default());
    let template = std::fs::read_to_string(&path).unwrap();
    assert!(template.contains("[[playlists]]"));
    // The template is all comments, so it loads as empty too.
    assert_eq!(load_config(&path).unwrap(), Config::default());
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[[playlists]]\nname = \"News\"\npath = [").unwrap();

    let result = load_config(&path);

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_hand_written_file_loads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[player]
command = "cvlc"

[[playlists]]
name = "News"
path = "news.m3u"

[favourites]
News = ["BBC", "BBC", "CNN"]
Empty = []
"#,
    )
    .unwrap();

    let config = load_config(&path).unwrap();

    assert_eq!(config.player.command.as_deref(), Some("cvlc"));
    assert_eq!(config.playlists.len(), 1);
    assert_eq!(config.favourites.names_for("News"), ["BBC", "CNN"]);
    assert!(config.favourites.names_for("Empty").is_empty());
}
