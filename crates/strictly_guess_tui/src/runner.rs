//! Interactive terminal session: setup, event loop, teardown.

use crate::app::App;
use crate::audio::{AudioDriver, AudioEvent, select_player};
use crate::config::AudioConfig;
use crate::settings::GameSettings;
use crate::ui;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

/// How long to wait for a key before redrawing.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the game until the player quits.
#[instrument(skip_all, fields(range = %settings.range()))]
pub async fn run(settings: GameSettings, audio: AudioConfig) -> Result<()> {
    info!("Starting Strictly Guess TUI");

    let (player, audio_error) = select_player(*audio.enabled());
    let (mut driver, mut audio_rx) = AudioDriver::new(player, audio.max_playback());

    let mut app = App::new(*settings.range(), *audio.enabled(), settings.source());
    if audio_error.is_some() {
        app.audio_unavailable();
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = event_loop(&mut terminal, &mut app, &mut driver, &mut audio_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    match serde_json::to_string(app.session()) {
        Ok(snapshot) => debug!(%snapshot, "Final session"),
        Err(e) => debug!(error = %e, "Could not serialise session"),
    }
    info!(attempts = app.session().attempts(), "Exiting");
    res
}

#[instrument(skip_all)]
async fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    driver: &mut AudioDriver,
    audio_rx: &mut mpsc::UnboundedReceiver<AudioEvent>,
) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        drain_audio(app, driver, audio_rx);

        if event::poll(POLL_INTERVAL)?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            let effects = app.handle_key(key);
            driver.execute(effects);
        }

        if app.should_quit() {
            info!("User quit");
            return Ok(());
        }

        // Let playback tasks make progress between polls.
        tokio::task::yield_now().await;
    }
}

/// Applies every pending audio completion to the app.
pub fn drain_audio(
    app: &mut App,
    driver: &mut AudioDriver,
    audio_rx: &mut mpsc::UnboundedReceiver<AudioEvent>,
) {
    while let Ok(event) = audio_rx.try_recv() {
        if driver.settle(&event) {
            debug!(?event, "Sound finished");
            app.sound_finished();
        }
    }
}
