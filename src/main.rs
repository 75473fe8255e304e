//! Terminal blockfall runner.
//!
//! Loads the config and score history, then runs a crossterm input loop on the
//! main thread. Gravity ticks come from a tokio timer task and are applied
//! between input polls, so the engine is only ever touched from this thread.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use blockfall::core::{GameEngine, ScoreStore};
use blockfall::driver::{Session, TickDriver};
use blockfall::input::{handle_key_event, should_quit, KEY_HELP};
use blockfall::store::{
    default_config_path, default_scores_path, load_config, JsonScoreFile,
};
use blockfall::term::{FrameBuffer, GameView, PanelInfo, TerminalRenderer, Viewport};

/// Upper bound on how long a due tick waits behind an idle input poll.
const POLL_INTERVAL: Duration = Duration::from_millis(15);

fn main() -> Result<()> {
    let scores_path = default_scores_path();
    init_logging(&scores_path.with_file_name("blockfall.log"));

    let config_path = default_config_path();
    let settings = load_config(&config_path)
        .with_context(|| format!("loading config from {}", config_path.display()))?;
    let config = settings.game_config()?;
    let store = JsonScoreFile::open_or_empty(&scores_path);
    let engine = GameEngine::with_seed(config, store, clock_seed())?;

    let runtime = tokio::runtime::Runtime::new().context("starting timer runtime")?;
    let mut session = Session::new(engine, TickDriver::new(runtime.handle().clone()));
    let view = GameView::new(settings.display.cell_width, settings.display.cell_height);
    info!(config = %config_path.display(), scores = %scores_path.display(), "blockfall starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;
    let result = run(&mut term, &mut session, view);

    // Always try to restore terminal state.
    if let Err(err) = term.exit() {
        warn!(%err, "failed to restore terminal");
    }
    info!(score = session.engine().score(), "blockfall exiting");
    result
}

fn run<S: ScoreStore>(
    term: &mut TerminalRenderer,
    session: &mut Session<S>,
    view: GameView,
) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let top_scores = session.engine().top_scores();
            let panel = PanelInfo {
                top_scores: &top_scores,
                help: KEY_HELP,
            };
            view.render_into(&session.engine().snapshot(), &panel, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= session.apply_action(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        dirty |= session.pump_ticks() > 0;
    }
}

/// Log to a file: the terminal is in raw mode. Logging is skipped, with a note
/// on stderr, if the file cannot be created.
fn init_logging(path: &Path) {
    let file = match open_log_file(path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("blockfall: logging disabled, cannot create {}: {err}", path.display());
            return;
        }
    };
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init()
    {
        eprintln!("blockfall: logging disabled: {err}");
    }
}

/// Create (truncate) the log file, making its directory first.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
