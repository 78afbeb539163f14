use clap::{Parser, ValueEnum};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

use vibecast::core::config::{config_dir, config_path, load_config};
use vibecast::tui;

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Parser)]
#[command(name = "vibecast", about = "Browse channel playlists and play them in VLC")]
struct Args {
    /// Config file (default: VIBECAST_CONFIG or <config dir>/vibecast/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log file (default: <config dir>/vibecast/vibecast.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log verbosity
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

/// The terminal belongs to the TUI, so logs go to a file.
fn init_logging(args: &Args) {
    let Some(path) = args
        .log_file
        .clone()
        .or_else(|| config_dir().map(|d| d.join("vibecast.log")))
    else {
        return;
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        let _ = fs::create_dir_all(parent);
    }

    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&path) {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_logging(&args);

    log::info!("Vibecast starting up");

    let path = config_path(args.config.as_deref());
    let config = match &path {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load {}: {}", path.display(), e);
                eprintln!("vibecast: {}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            log::warn!("No config directory available; changes will not be saved");
            Default::default()
        }
    };

    tui::run(config, path).await
}
