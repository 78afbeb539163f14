//! VLC driven through its RC (remote control) interface.
//!
//! ```text
//!   play(url)
//!     ├── no session?  spawn `vlc --intf rc --rc-host 127.0.0.1:<port>`
//!     │                connect TCP (10 tries, 300ms apart)
//!     └── write "add <url>\n"   ── fails? drop session, relaunch once
//! ```
//!
//! One VLC instance is reused for every channel switch, so picking a new
//! channel swaps the stream instead of opening another window.

use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::process::{Child, Command};

use super::{PlayerError, PlayerGateway};
use crate::core::config::PlayerSettings;

const CONNECT_ATTEMPTS: usize = 10;
const CONNECT_DELAY: Duration = Duration::from_millis(300);

struct VlcSession {
    child: Child,
    conn: TcpStream,
}

pub struct VlcPlayer {
    settings: PlayerSettings,
    session: Option<VlcSession>,
}

impl VlcPlayer {
    pub fn new(settings: PlayerSettings) -> Self {
        Self {
            settings,
            session: None,
        }
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        self.session.is_some()
    }

    fn rc_address(&self) -> String {
        format!("127.0.0.1:{}", self.settings.rc_port)
    }

    async fn launch(&self) -> Result<VlcSession, PlayerError> {
        let address = self.rc_address();
        info!("Launching {} with RC interface on {}", self.settings.command, address);

        let mut cmd = Command::new(&self.settings.command);
        cmd.args(["--intf", "rc", "--rc-host", &address, "--no-video-title-show", "--quiet"]);
        cmd.args(&self.settings.extra_args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::null());
        cmd.kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PlayerError::NotFound(self.settings.command.clone())
            } else {
                PlayerError::Spawn(e.to_string())
            }
        })?;

        let mut last_error = String::from("no attempt made");
        for attempt in 1..=CONNECT_ATTEMPTS {
            match TcpStream::connect(&address).await {
                Ok(conn) => {
                    debug!("Connected to VLC RC on attempt {}", attempt);
                    return Ok(VlcSession { child, conn });
                }
                Err(e) => {
                    last_error = e.to_string();
                    debug!("VLC RC connect attempt {} failed: {}", attempt, e);
                }
            }
            if let Ok(Some(status)) = child.try_wait() {
                return Err(PlayerError::Exited(status.to_string()));
            }
            tokio::time::sleep(CONNECT_DELAY).await;
        }

        let _ = child.kill().await;
        Err(PlayerError::Connect(format!("{address}: {last_error}")))
    }

    async fn send(session: &mut VlcSession, line: &str) -> std::io::Result<()> {
        session.conn.write_all(line.as_bytes()).await?;
        session.conn.flush().await
    }

    async fn discard_session(&mut self) {
        if let Some(mut session) = self.session.take() {
            let _ = session.conn.shutdown().await;
            let _ = session.child.kill().await;
            let _ = session.child.wait().await;
        }
    }
}

#[async_trait]
impl PlayerGateway for VlcPlayer {
    fn name(&self) -> &str {
        "vlc"
    }

    async fn play(&mut self, url: &str) -> Result<(), PlayerError> {
        let line = format!("add {url}\n");

        if let Some(session) = self.session.as_mut() {
            match Self::send(session, &line).await {
                Ok(()) => {
                    info!("VLC now playing {}", url);
                    return Ok(());
                }
                Err(e) => {
                    warn!("VLC session went away ({}), relaunching", e);
                    self.discard_session().await;
                }
            }
        }

        let mut session = self.launch().await?;
        Self::send(&mut session, &line)
            .await
            .map_err(|e| PlayerError::Io(e.to_string()))?;
        self.session = Some(session);
        info!("VLC now playing {}", url);
        Ok(())
    }

    async fn stop(&mut self) -> Result<(), PlayerError> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        if let Err(e) = Self::send(session, "quit\n").await {
            debug!("VLC quit command not delivered: {}", e);
        }
        self.discard_session().await;
        info!("VLC stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio::net::TcpListener;

    fn settings(command: &str, rc_port: u16) -> PlayerSettings {
        PlayerSettings {
            command: command.to_string(),
            rc_port,
            extra_args: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_missing_binary_is_not_found() {
        let mut player = VlcPlayer::new(settings("vibecast-no-such-player", 1));
        let result = player.play("http://x/1").await;
        assert!(matches!(result, Err(PlayerError::NotFound(_))));
        assert!(!player.is_running());
    }

    #[tokio::test]
    async fn test_stop_without_session_is_ok() {
        let mut player = VlcPlayer::new(settings("vlc", 1));
        assert!(player.stop().await.is_ok());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_play_sends_add_command_over_rc() {
        // Stand in for VLC's RC listener; `true` plays the spawned process.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut lines = BufReader::new(stream).lines();
            let first = lines.next_line().await.unwrap();
            let second = lines.next_line().await.unwrap();
            (first, second)
        });

        let mut player = VlcPlayer::new(settings("true", port));
        player.play("http://example.com/bbc").await.unwrap();
        assert!(player.is_running());
        player.play("http://example.com/cnn").await.unwrap();

        let (first, second) = server.await.unwrap();
        assert_eq!(first.as_deref(), Some("add http://example.com/bbc"));
        assert_eq!(second.as_deref(), Some("add http://example.com/cnn"));

        player.stop().await.unwrap();
        assert!(!player.is_running());
    }
}
