use std::io;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc::{self, UnboundedReceiver};

use vinyl_player::audio::AudioBackend;
use vinyl_player::config::{Cli, Config};
use vinyl_player::controller::AppController;
use vinyl_player::logging;
use vinyl_player::model::{AppModel, AudioEvent, Event, Session};
use vinyl_player::source::{self, LyricsStore};
use vinyl_player::view::{AppView, ViewAreas};

/// Milliseconds per vinyl animation frame
const VINYL_FRAME_MS: u128 = 200;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    let _log_guard = match logging::init_logging(&config.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== vinyl-player starting ===");

    let tracks = match source::list_tracks(&config) {
        Ok(tracks) => tracks,
        Err(e) => {
            tracing::error!(error = %e, "Could not read the track list");
            Vec::new()
        }
    };

    // Audio, lyrics and fade timers all report back through this channel
    let (events_tx, events_rx) = mpsc::unbounded_channel::<Event>();

    let mut audio_error = None;
    let audio = match AudioBackend::spawn(events_tx.clone()) {
        Ok(backend) => Some(backend),
        Err(e) => {
            tracing::warn!(error = %format!("{e:#}"), "Running without audio output");
            audio_error = Some(format!("Audio init failed: {e}"));
            None
        }
    };

    let model = AppModel::new(Session::create(config.volume));
    let lyrics = LyricsStore::new(config.music_dir.clone());
    let mut controller = AppController::new(model, audio, lyrics, events_tx, config);
    controller.start(tracks);
    if let Some(message) = audio_error {
        controller.dispatch(Event::Audio(AudioEvent::Failed(message)));
    }

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut controller, events_rx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    controller.shutdown();

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("vinyl-player shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &mut AppController,
    mut events: UnboundedReceiver<Event>,
) -> io::Result<()> {
    let started = Instant::now();
    let input_poll = controller.config().input_poll;

    loop {
        controller.drain_events(&mut events);
        controller.tick();

        let tick = (started.elapsed().as_millis() / VINYL_FRAME_MS) as u64;
        let mut areas = ViewAreas::default();
        terminal.draw(|f| {
            areas = AppView::render(f, controller.model().get_ui_state(), tick);
        })?;
        controller.set_view_areas(areas);

        if controller.model().should_quit() {
            break;
        }

        if event::poll(input_poll)? {
            match event::read()? {
                TermEvent::Key(key) => controller.handle_key_event(key),
                TermEvent::Mouse(mouse) => controller.handle_mouse_event(mouse),
                _ => {}
            }
        }

        // Let spawned lyrics and fade tasks make progress
        tokio::task::yield_now().await;
    }

    Ok(())
}
