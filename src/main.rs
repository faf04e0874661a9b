//! Noun Road terminal runner (default binary).
//!
//! Renders with the framebuffer renderer from `noun_road::term` and reads keys
//! with crossterm. Logs go to a file since the terminal is taken over.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use noun_road::app::App;
use noun_road::core::DuplicatePolicy;
use noun_road::term::{FrameBuffer, GameView, LayoutConfig, TerminalRenderer, Viewport};

/// Target frame time.
const FRAME_MS: u64 = 16;

#[derive(Parser)]
#[command(name = "noun-road")]
#[command(about = "Two-player word-chain game for the terminal", long_about = None)]
struct Cli {
    /// JSON layout file (defaults to the built-in layout)
    #[arg(short, long, value_name = "FILE")]
    layout: Option<PathBuf>,

    /// Where to write logs (RUST_LOG controls the level)
    #[arg(long, value_name = "FILE", default_value = "noun-road.log")]
    log_file: PathBuf,

    /// Which earlier words a new word may not repeat
    #[arg(long, value_enum, default_value = "full-history")]
    duplicate_policy: PolicyArg,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum PolicyArg {
    /// Any word still in the recent history
    FullHistory,
    /// Only the word played just before
    PreviousWord,
}

impl From<PolicyArg> for DuplicatePolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::FullHistory => DuplicatePolicy::FullHistory,
            PolicyArg::PreviousWord => DuplicatePolicy::PreviousWord,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.log_file)
        .with_context(|| format!("failed to open log file {}", cli.log_file.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();

    let layout = match &cli.layout {
        Some(path) => LayoutConfig::load(path)?,
        None => LayoutConfig::default(),
    };
    tracing::info!(policy = ?cli.duplicate_policy, "starting noun-road");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, GameView::new(layout), cli.duplicate_policy.into());

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        tracing::error!("exiting with error: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, view: GameView, policy: DuplicatePolicy) -> Result<()> {
    let mut app = App::new(policy);
    let mut fb = FrameBuffer::new(0, 0);

    let frame_duration = Duration::from_millis(FRAME_MS);
    let mut last_frame = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&app.snapshot(), app.hud(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next frame.
        let timeout = frame_duration
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if app.should_quit() {
            tracing::info!(logged = app.messages_logged(), "quit requested");
            return Ok(());
        }

        // Advance by however long the frame actually took.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame_duration {
            last_frame = Instant::now();
            app.tick(elapsed.as_secs_f32());
        }
    }
}
