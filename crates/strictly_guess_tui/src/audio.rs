//! Audio adapter: executes sound effects requested by the game session.
//!
//! The session only emits [`Effect`]s. The [`AudioDriver`] turns them into
//! fire-and-forget playback tasks and reports back when a cue ends, either
//! naturally or because it hit the playback cap.

use derive_more::{Display, Error};
use std::io::{IsTerminal, Write};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use strictly_guess::{Effect, SoundCue};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};

/// Audio backend error.
#[derive(Debug, Clone, Display, Error)]
#[display("Audio error: {} at {}:{}", message, file, line)]
pub struct AudioError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl AudioError {
    /// Creates a new audio error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Something that can play a feedback cue.
#[async_trait::async_trait]
pub trait SoundPlayer: Send + Sync {
    /// Plays `cue`, resolving when it ends naturally.
    async fn play(&self, cue: SoundCue) -> Result<(), AudioError>;

    /// Silences any current playback.
    fn stop(&self);

    /// Returns the backend's display name.
    fn name(&self) -> &str;
}

/// Plays cues as terminal bell patterns.
///
/// The correct cue rings three times, close twice, far once.
pub struct BellPlayer {
    out: Mutex<Box<dyn Write + Send>>,
    gap: Duration,
}

impl BellPlayer {
    /// Rings the bell on stdout. Fails when stdout is not a terminal.
    #[instrument]
    pub fn new() -> Result<Self, AudioError> {
        if !std::io::stdout().is_terminal() {
            return Err(AudioError::new("stdout is not a terminal, no bell available"));
        }
        Ok(Self::with_writer(Box::new(std::io::stdout()), Duration::from_millis(180)))
    }

    /// Rings the bell on a custom writer.
    pub fn with_writer(out: Box<dyn Write + Send>, gap: Duration) -> Self {
        Self {
            out: Mutex::new(out),
            gap,
        }
    }

    /// Number of rings for a cue.
    pub fn rings(cue: SoundCue) -> usize {
        match cue {
            SoundCue::CorrectSound => 3,
            SoundCue::CloseSound => 2,
            SoundCue::FarSound => 1,
        }
    }

    fn ring(&self) -> Result<(), AudioError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| AudioError::new("bell writer lock poisoned"))?;
        out.write_all(b"\x07")
            .and_then(|_| out.flush())
            .map_err(|e| AudioError::new(format!("Failed to ring bell: {}", e)))
    }
}

#[async_trait::async_trait]
impl SoundPlayer for BellPlayer {
    async fn play(&self, cue: SoundCue) -> Result<(), AudioError> {
        for _ in 0..Self::rings(cue) {
            self.ring()?;
            tokio::time::sleep(self.gap).await;
        }
        Ok(())
    }

    fn stop(&self) {
        // A bell cannot be interrupted once rung.
    }

    fn name(&self) -> &str {
        "bell"
    }
}

/// Plays nothing. Cues complete immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentPlayer;

#[async_trait::async_trait]
impl SoundPlayer for SilentPlayer {
    async fn play(&self, _cue: SoundCue) -> Result<(), AudioError> {
        Ok(())
    }

    fn stop(&self) {}

    fn name(&self) -> &str {
        "silent"
    }
}

/// Notification from a playback task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioEvent {
    /// A cue stopped playing.
    Finished {
        /// Identifies the play request.
        ticket: u64,
        /// The cue that played.
        cue: SoundCue,
        /// True when the playback cap cut it off.
        capped: bool,
    },
}

/// Runs play/stop requests on the tokio runtime.
pub struct AudioDriver {
    player: Arc<dyn SoundPlayer>,
    cap: Duration,
    events: mpsc::UnboundedSender<AudioEvent>,
    current: Option<(u64, JoinHandle<()>)>,
    next_ticket: u64,
}

impl AudioDriver {
    /// Creates a driver and the channel its completion events arrive on.
    #[instrument(skip(player), fields(backend = player.name()))]
    pub fn new(
        player: Arc<dyn SoundPlayer>,
        cap: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<AudioEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        info!(cap_ms = cap.as_millis() as u64, "Audio driver ready");
        (
            Self {
                player,
                cap,
                events,
                current: None,
                next_ticket: 0,
            },
            rx,
        )
    }

    /// Executes effects in order.
    pub fn execute(&mut self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            match effect {
                Effect::PlaySound(cue) => self.play(cue),
                Effect::StopSound => self.stop(),
            }
        }
    }

    /// Accepts an event if it belongs to the current request.
    ///
    /// Events from stopped or superseded requests return `false` and must
    /// not clear the session's playing flag.
    pub fn settle(&mut self, event: &AudioEvent) -> bool {
        let AudioEvent::Finished { ticket, .. } = event;
        match &self.current {
            Some((current, _)) if current == ticket => {
                self.current = None;
                true
            }
            _ => {
                debug!(ticket, "Ignoring stale audio event");
                false
            }
        }
    }

    /// True while a request is outstanding.
    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    #[instrument(skip(self))]
    fn play(&mut self, cue: SoundCue) {
        self.stop();

        let ticket = self.next_ticket;
        self.next_ticket += 1;

        let player = Arc::clone(&self.player);
        let events = self.events.clone();
        let cap = self.cap;

        let handle = tokio::spawn(async move {
            let capped = match tokio::time::timeout(cap, player.play(cue)).await {
                Ok(Ok(())) => false,
                Ok(Err(e)) => {
                    warn!(error = %e, cue = cue.id(), "Playback failed");
                    false
                }
                Err(_) => {
                    debug!(cue = cue.id(), "Playback cap reached");
                    player.stop();
                    true
                }
            };
            // The receiver is gone only when the UI has shut down.
            let _ = events.send(AudioEvent::Finished {
                ticket,
                cue,
                capped,
            });
        });

        debug!(ticket, cue = cue.id(), "Playback started");
        self.current = Some((ticket, handle));
    }

    #[instrument(skip(self))]
    fn stop(&mut self) {
        if let Some((ticket, handle)) = self.current.take() {
            debug!(ticket, "Stopping playback");
            handle.abort();
            self.player.stop();
        }
    }
}

impl Drop for AudioDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Picks the audio backend, falling back to silence when the bell is unavailable.
///
/// The second slot carries the initialisation error, if any.
#[instrument]
pub fn select_player(enabled: bool) -> (Arc<dyn SoundPlayer>, Option<AudioError>) {
    if !enabled {
        info!("Audio muted");
        return (Arc::new(SilentPlayer), None);
    }
    match BellPlayer::new() {
        Ok(bell) => (Arc::new(bell), None),
        Err(e) => {
            warn!(error = %e, "Audio unavailable, falling back to silence");
            (Arc::new(SilentPlayer), Some(e))
        }
    }
}
