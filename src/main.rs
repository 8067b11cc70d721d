//! termdash — a personal dashboard for the terminal.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌───────────┐  PollMsg   ┌──────────┐  draw()  ┌──────────┐
//! │  poll.rs  │ ─────────► │  app.rs  │ ───────► │  ui.rs   │
//! │ (workers) │  (channel) │ (state)  │          │ (render) │
//! └───────────┘            └──────────┘          └──────────┘
//!       ▲                       ▲
//!       │ Requests              │ handle_key_event()
//!       └──────────────────┌──────────┐
//!                          │ input.rs │
//!                          └──────────┘
//! ```
//!
//! * **`source/`** — the fallback-aware fetch contract and the concrete
//!   quote / weather / news sources.
//! * **`poll`** — one background thread per networked widget, each with its
//!   own schedule, reporting over a channel.
//! * **`clock`** — pure fixed-offset time projections.
//! * **`search`** — query → search URL plus best-effort browser launch.
//! * **`app`** — owns all application state (fetch states, pagination,
//!   search box, theme).
//! * **`ui`** — pure rendering: reads `App` state and draws widgets.
//! * **`input`** — maps key events to `App` mutations and worker requests.
//! * **`config`** — load/save boundary for the persisted theme preference.
//! * **`main`** — wires everything together and runs the event loop.

mod app;
mod clock;
mod config;
mod input;
mod poll;
mod search;
mod source;
mod ui;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use app::App;
use config::Preferences;
use source::{Category, NewsSource, QuoteSource, WeatherSource};

const QUOTE_URL: &str = "https://zenquotes.io/api/random";
const WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";
const NEWS_URL: &str = "https://inshorts.deta.dev/news";

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen. When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal. This prevents the common TUI bug where a panic leaves the
/// terminal in a broken state.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message. Without this, a panic inside the event loop would leave
/// raw mode enabled and the alternate screen active.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

// ---------------------------------------------------------------------------
// Logging — stdout belongs to the TUI, so events go to a file
// ---------------------------------------------------------------------------

fn log_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| Path::new(&home).join(".termdash.log"))
}

fn init_tracing() -> Result<()> {
    let Some(path) = log_path() else {
        return Ok(());
    };
    let file = File::create(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing init failed: {e}"))
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    install_panic_hook();
    init_tracing()?;

    // -- load persisted preferences (the only state that survives a run) -----
    let prefs_path = config::default_path();
    let prefs = prefs_path
        .as_deref()
        .map(config::load)
        .unwrap_or_default();

    // -- start the widget workers --------------------------------------------
    // Each worker performs its mount-triggered load immediately.
    let handle = poll::spawn(
        QuoteSource::new(QUOTE_URL),
        WeatherSource::new(WEATHER_URL),
        NewsSource::new(NEWS_URL, Category::All),
        Category::All,
    );

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(prefs.dark_mode);

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick). Each iteration:
    //   1. Drain any settled worker results.
    //   2. Refresh the clock instant and render.
    //   3. Poll for keyboard input (non-blocking, up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        while let Ok(msg) = handle.events.try_recv() {
            app.apply(msg);
        }

        app.now = Utc::now();
        guard.terminal.draw(|f| ui::draw(&app, f))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, &handle, key);
            }
        }

        if app.quit {
            break;
        }
    }

    // -- save preferences (explicit save boundary) ---------------------------
    if let Some(path) = prefs_path {
        let prefs = Preferences {
            dark_mode: app.dark_mode,
        };
        if let Err(err) = config::save(&path, prefs) {
            tracing::warn!(error = %err, "could not save preferences");
        }
    }

    // `guard` and `handle` are dropped here, restoring the terminal and
    // stopping the workers.
    Ok(())
}
