//! Rewind - terminal tic-tac-toe with time travel.

use anyhow::Result;
use clap::Parser;
use rewind::{Cli, Command, ReplayOptions, Settings};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command() {
        Command::Play { config } => run_play(&config),
        Command::Replay {
            moves,
            jump,
            descending,
            json,
        } => run_replay(
            ReplayOptions {
                moves,
                jump,
                descending,
            },
            json,
        ),
    }
}

/// Run the interactive terminal UI
fn run_play(config: &std::path::Path) -> Result<()> {
    let settings = Settings::load_or_default(config)?;
    rewind::tui::run_tui(&settings)
}

/// Run a headless replay and print the view
fn run_replay(opts: ReplayOptions, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting replay");
    let game = rewind::replay(&opts)?;
    let view = game.view();

    if json {
        println!("{}", rewind::render_json(&view)?);
    } else {
        print!("{}", rewind::render_text(&view));
    }
    Ok(())
}
