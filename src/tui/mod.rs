//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! translates keyboard events into core::Action values, and runs the
//! `Effect`s that `update` hands back.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Runtime
//!
//! ```text
//!  keys ──► keymap ──► update() ──► [Effect] ──► Runtime
//!                        ▲                         │
//!                        │   Action (std mpsc)     ├── load task (one at a time, abortable)
//!                        └─────────────────────────├── config writer (serial saves)
//!                                                  └── player task (owns the gateway)
//! ```
//!
//! The loop only redraws after a key or a background result, so an idle
//! session costs one poll every 250ms.

mod component;
mod components;
mod event;
mod keymap;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::path::PathBuf;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use tokio::sync::mpsc as tokio_mpsc;
use tokio::task::{AbortHandle, JoinHandle};

use crate::core::action::{Action, Effect, update};
use crate::core::config::{Config, resolve_player, save_config};
use crate::core::state::App;
use crate::player::{PlayerGateway, VlcPlayer};
use crate::playlist::{ChannelSource, M3uSource};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);
const SHUTDOWN_GRACE: Duration = Duration::from_secs(3);

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Disambiguated escape codes make Esc arrive immediately instead of
        // waiting to see whether it starts a sequence. Terminals without the
        // protocol ignore it.
        execute!(
            stdout(),
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
        info!("Terminal modes enabled (steady block cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            SetCursorStyle::DefaultUserShape
        );
    }
}

pub async fn run(config: Config, config_path: Option<PathBuf>) -> std::io::Result<()> {
    let player = VlcPlayer::new(resolve_player(&config));
    let mut app = App::new(config);

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    let mut runtime = Runtime::start(
        tx,
        Arc::new(M3uSource::new()),
        Box::new(player),
        config_path,
    );

    let mut terminal = ratatui::init();
    let terminal_mode_guard = TerminalModeGuard::new()
        .inspect_err(|e| warn!("Could not enable terminal modes: {}", e))
        .ok();

    let result = event_loop(&mut terminal, &mut app, &mut runtime, &rx);

    drop(terminal_mode_guard);
    ratatui::restore();

    runtime.shutdown().await;
    info!("Vibecast exiting");
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    runtime: &mut Runtime,
    rx: &mpsc::Receiver<Action>,
) -> std::io::Result<()> {
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(IDLE_POLL);
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = keymap::to_action(&app.mode, event) else {
                continue;
            };
            let effects = update(app, action);
            runtime.execute(effects);
            if app.should_quit {
                return Ok(());
            }
        }

        // Handle background task results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effects = update(app, action);
            runtime.execute(effects);
        }
    }
}

struct PlayRequest {
    name: String,
    url: String,
}

/// Carries out effects without blocking the input loop. Every outcome
/// comes back through `tx` as an `Action`.
struct Runtime {
    tx: mpsc::Sender<Action>,
    source: Arc<dyn ChannelSource>,
    active_load: Option<AbortHandle>,
    saves: tokio_mpsc::UnboundedSender<Config>,
    plays: tokio_mpsc::UnboundedSender<PlayRequest>,
    writer: JoinHandle<()>,
    player: JoinHandle<()>,
}

impl Runtime {
    fn start(
        tx: mpsc::Sender<Action>,
        source: Arc<dyn ChannelSource>,
        player: Box<dyn PlayerGateway>,
        config_path: Option<PathBuf>,
    ) -> Self {
        let (saves, writer) = spawn_config_writer(config_path, tx.clone());
        let (plays, player) = spawn_player(player, tx.clone());
        Self {
            tx,
            source,
            active_load: None,
            saves,
            plays,
            writer,
            player,
        }
    }

    fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Quit => info!("Quit requested"),
                Effect::LoadPlaylist {
                    generation,
                    location,
                } => {
                    self.cancel_load();
                    self.active_load = Some(self.spawn_load(generation, location));
                }
                Effect::CancelLoad => self.cancel_load(),
                Effect::SaveConfig(config) => {
                    if self.saves.send(config).is_err() {
                        warn!("Config writer is gone; save dropped");
                    }
                }
                Effect::Play { name, url } => {
                    if self.plays.send(PlayRequest { name, url }).is_err() {
                        warn!("Player task is gone; playback request dropped");
                    }
                }
            }
        }
    }

    fn cancel_load(&mut self) {
        if let Some(handle) = self.active_load.take() {
            debug!("Aborting in-flight playlist load");
            handle.abort();
        }
    }

    fn spawn_load(&self, generation: u64, location: String) -> AbortHandle {
        info!("Loading playlist {} (generation {})", location, generation);
        let source = self.source.clone();
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let result = source
                .load_channels(&location)
                .await
                .map_err(|e| e.to_string());
            if let Err(e) = &result {
                warn!("Playlist load failed for {}: {}", location, e);
            }
            if tx
                .send(Action::PlaylistLoaded { generation, result })
                .is_err()
            {
                warn!("Failed to send playlist result: receiver dropped");
            }
        });
        handle.abort_handle()
    }

    /// Stops background work. Queued saves are flushed and the player is
    /// shut down before this returns (or the grace period runs out).
    async fn shutdown(mut self) {
        self.cancel_load();
        let Runtime {
            saves,
            plays,
            writer,
            player,
            ..
        } = self;
        drop(saves);
        drop(plays);
        for (name, handle) in [("config writer", writer), ("player", player)] {
            match tokio::time::timeout(SHUTDOWN_GRACE, handle).await {
                Ok(Ok(())) => debug!("{} stopped", name),
                Ok(Err(e)) => warn!("{} task failed: {}", name, e),
                Err(_) => warn!("{} did not stop within {:?}", name, SHUTDOWN_GRACE),
            }
        }
    }
}

/// Single consumer, so saves land in the order they were requested.
fn spawn_config_writer(
    path: Option<PathBuf>,
    tx: mpsc::Sender<Action>,
) -> (tokio_mpsc::UnboundedSender<Config>, JoinHandle<()>) {
    let (save_tx, mut save_rx) = tokio_mpsc::unbounded_channel::<Config>();
    let handle = tokio::spawn(async move {
        while let Some(config) = save_rx.recv().await {
            let result = match &path {
                Some(path) => {
                    let target = path.clone();
                    match tokio::task::spawn_blocking(move || save_config(&target, &config)).await
                    {
                        Ok(result) => result.map_err(|e| e.to_string()),
                        Err(e) => Err(e.to_string()),
                    }
                }
                None => Err("no config directory available".to_string()),
            };
            match &result {
                Ok(()) => info!("Config saved"),
                Err(e) => warn!("Config save failed: {}", e),
            }
            if tx.send(Action::ConfigSaved(result)).is_err() {
                warn!("Failed to send save result: receiver dropped");
            }
        }
    });
    (save_tx, handle)
}

/// The player lives inside this task; closing the request channel stops it.
fn spawn_player(
    mut player: Box<dyn PlayerGateway>,
    tx: mpsc::Sender<Action>,
) -> (tokio_mpsc::UnboundedSender<PlayRequest>, JoinHandle<()>) {
    let (play_tx, mut play_rx) = tokio_mpsc::unbounded_channel::<PlayRequest>();
    let handle = tokio::spawn(async move {
        while let Some(PlayRequest { name, url }) = play_rx.recv().await {
            info!("Playing {} via {}", name, player.name());
            let result = player.play(&url).await.map_err(|e| e.to_string());
            if let Err(e) = &result {
                warn!("Playback of {} failed: {}", name, e);
            }
            if tx.send(Action::PlaybackStarted { name, result }).is_err() {
                warn!("Failed to send playback result: receiver dropped");
            }
        }
        if let Err(e) = player.stop().await {
            warn!("Failed to stop {}: {}", player.name(), e);
        }
    });
    (play_tx, handle)
}
