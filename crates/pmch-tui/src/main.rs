//! PMCH Guide - a terminal guide to Patna Medical College Hospital.
//!
//! Shows departments, OPD timings, FAQs and emergency numbers in Hindi or
//! English. Everything fetched is cached on disk, so the guide keeps working
//! without a connection.

mod app;
mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use pmch_core::Config;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use app::{App, AppState};
use ui::input::handle_input;
use ui::render::render;

// ============================================================================
// Constants
// ============================================================================

/// Timeout for polling terminal events (in milliseconds)
const EVENT_POLL_TIMEOUT_MS: u64 = 100;

/// Redraw at least this often so "N min ago" stays current.
const IDLE_REDRAW_SECS: u64 = 30;

const LOG_FILE: &str = "pmch.log";

/// Log to a file in the cache directory; the terminal belongs to the UI.
/// Use RUST_LOG to change the level (default warn).
fn init_tracing(config: &Config) -> Option<WorkerGuard> {
    let dir = config.cache_dir().ok()?;
    std::fs::create_dir_all(&dir).ok()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, LOG_FILE));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(filter)
        .init();
    Some(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {:#}. Using default settings.", e);
        let mut config = Config::default();
        config.apply_overrides(|name| std::env::var(name).ok());
        config
    });

    let _log_guard = init_tracing(&config);
    info!("PMCH Guide starting");

    let mut app = App::new(&config).await?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        warn!(error = %e, "Exited with error");
        eprintln!("Error: {}", e);
    }

    info!("PMCH Guide shutting down");
    result
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let idle_redraw = Duration::from_secs(IDLE_REDRAW_SECS);
    let mut last_draw = std::time::Instant::now();

    loop {
        // Fetch listeners flag changes; redraw on those, input, or idle tick
        if app.take_dirty() || last_draw.elapsed() >= idle_redraw {
            terminal.draw(|f| render(f, app))?;
            last_draw = std::time::Instant::now();
        }

        if event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    // Ctrl+C to quit
                    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        return Ok(());
                    }

                    if handle_input(app, key).await {
                        return Ok(());
                    }
                    terminal.draw(|f| render(f, app))?;
                    last_draw = std::time::Instant::now();
                }
                Event::Resize(_, _) => {
                    terminal.draw(|f| render(f, app))?;
                    last_draw = std::time::Instant::now();
                }
                _ => {}
            }
        }

        if matches!(app.state, AppState::Quitting) {
            return Ok(());
        }
    }
}
