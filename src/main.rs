//! tictactoe_rewind - unified CLI.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_rewind::{
    Action, AppConfig, Cli, Command, GameView, LogTarget, controller, init_tracing, render_text,
    run_tui,
};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    // The TUI owns the screen, so it logs to a file.
    let target = match cli.command {
        Command::Play => LogTarget::File,
        Command::Replay { .. } => LogTarget::Stderr,
    };
    init_tracing(&config, target)?;

    match cli.command {
        Command::Play => run_tui(&config),
        Command::Replay { actions, json } => run_replay(actions, json),
    }
}

/// Apply `actions` from a new game and print the result.
#[instrument(skip(actions), fields(count = actions.len()))]
fn run_replay(actions: Vec<Action>, json: bool) -> Result<()> {
    info!("Replaying actions");
    let state = controller::replay(actions).context("Replay failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    } else {
        print!("{}", render_text(&GameView::from_state(&state)));
    }

    Ok(())
}
