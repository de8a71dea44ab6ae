//! Terminal memory game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_memory::term`.
//! Sound cues ring the terminal bell.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tui_memory::core::{
    DealRng, GameConfig, Presenter, RoundController, RoundSnapshot, Session,
};
use tui_memory::input::{handle_key_event, should_quit, CardCursor, KeyIntent};
use tui_memory::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_memory::types::{Difficulty, GameAction, RoundStatus, GRID_COLUMNS, TICK_MS};

#[derive(Parser, Debug)]
#[command(author, version, about = "Memory matching card game for the terminal", long_about = None)]
struct Cli {
    /// JSON file with game options.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Seed for the deal; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Starting level: easy, medium or hard.
    #[arg(short, long, value_parser = parse_difficulty)]
    difficulty: Option<Difficulty>,
    /// Seconds allowed per round.
    #[arg(long)]
    round_seconds: Option<u32>,
    /// Start with sound cues off.
    #[arg(long)]
    mute: bool,
    /// Write logs here (also `MEMORY_LOG_PATH`). Nothing is logged otherwise.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn parse_difficulty(s: &str) -> std::result::Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty `{s}`"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli
        .log_file
        .clone()
        .or_else(|| std::env::var_os("MEMORY_LOG_PATH").map(PathBuf::from));
    if let Some(path) = log_path.as_deref() {
        init_tracing(path)?;
    }

    let config = load_config(&cli)?;
    let rng = match cli.seed {
        Some(seed) => DealRng::new(seed),
        None => DealRng::from_entropy(),
    };
    let controller = RoundController::new(config, rng).context("invalid game configuration")?;
    let mut session = Session::new(controller);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Stderr belongs to the terminal UI, so logs only go to a file.
fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match cli.config.as_deref() {
        Some(path) => GameConfig::load(path).context("loading config file")?,
        None => GameConfig::default(),
    };
    config.apply_env();

    if let Some(d) = cli.difficulty {
        config.difficulty = d;
    }
    if let Some(secs) = cli.round_seconds {
        config.round_seconds = secs;
    }
    if cli.mute {
        config.muted = true;
    }
    tracing::info!(?config, "configuration loaded");
    Ok(config)
}

/// Collects sound cues between frames; the run loop rings the bell.
#[derive(Default)]
struct BellPresenter {
    pending: bool,
}

impl BellPresenter {
    fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl Presenter for BellPresenter {
    fn on_match_sound(&mut self, _volume: f32) {
        self.pending = true;
    }

    fn on_round_won_sound(&mut self, _volume: f32) {
        self.pending = true;
    }

    fn on_round_lost_sound(&mut self, _volume: f32) {
        self.pending = true;
    }
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut cursor = CardCursor::new(GRID_COLUMNS);
    let mut presenter = BellPresenter::default();
    let mut snap = RoundSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        session.controller().snapshot_into(&mut snap);
        cursor.set_len(snap.cards.len());
        let highlight = (snap.status == RoundStatus::Running).then(|| cursor.index());
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            &snap,
            &session.controller().config().symbols,
            highlight,
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        Some(KeyIntent::Cursor(direction)) => cursor.step(direction),
                        Some(KeyIntent::Select) => {
                            if let Some(id) = cursor.selected() {
                                session.apply(GameAction::Flip(id));
                            }
                        }
                        Some(KeyIntent::Action(action)) => {
                            if session.apply(action) && matches!(action, GameAction::Start) {
                                cursor.reset();
                            }
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let elapsed = last_tick.elapsed();
        if elapsed >= tick_duration {
            last_tick = Instant::now();
            session.advance(elapsed.as_millis().min(u32::MAX as u128) as u32);
        }

        session.pump(&mut presenter);
        if presenter.take() {
            term.bell()?;
        }
    }
}
