//! Solo Tic-Tac-Toe - terminal front-end
//!
//! Loads statistics at startup, runs the game until the user quits, and
//! flushes statistics on the way out.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use solo_tictactoe::{GameSession, SoloConfig};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::{App, Control};
use cli::{Cli, Command};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = cli.load_config().context("Failed to load configuration")?;

    match cli.command.unwrap_or_default() {
        Command::Play => run_play(&config),
        Command::Stats => run_stats(&config),
        Command::ResetStats => run_reset_stats(&config),
    }
}

fn env_filter(config: &SoloConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()))
}

/// Logs to the configured file so output never lands on the TUI.
fn init_file_logging(config: &SoloConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file '{}'", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_logging(config: &SoloConfig) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(io::stderr)
        .try_init();
}

/// Runs the interactive game.
fn run_play(config: &SoloConfig) -> Result<()> {
    init_file_logging(config)?;
    info!("Starting Solo Tic-Tac-Toe");

    let mut app = App::new(GameSession::from_config(config));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = app.session().save() {
        eprintln!("Warning: statistics were not saved: {}", e);
    }

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Exiting");
    res
}

#[instrument(skip_all)]
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        if app.take_redraw() {
            terminal.draw(|frame| ui::draw(frame, app))?;
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key.code) == Control::Quit {
                    return Ok(());
                }
            }
            Event::Resize(..) => app.request_redraw(),
            _ => {}
        }
    }
}

/// Prints the saved statistics.
fn run_stats(config: &SoloConfig) -> Result<()> {
    init_stderr_logging(config);
    let stats = GameSession::from_config(config).snapshot().statistics;
    println!("{}", stats);
    println!(
        "Games: {}  Win rate: {:.1}%",
        stats.total_games(),
        stats.win_rate()
    );
    Ok(())
}

/// Zeroes and persists the saved statistics.
fn run_reset_stats(config: &SoloConfig) -> Result<()> {
    init_stderr_logging(config);
    let mut session = GameSession::from_config(config);
    session.reset_statistics().with_context(|| {
        format!(
            "Failed to reset statistics in '{}'",
            config.stats_path().display()
        )
    })?;
    println!("Statistics reset.");
    Ok(())
}
