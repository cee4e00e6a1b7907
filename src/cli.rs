//! Command-line interface for tictactoe_rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::Action;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults apply if it does not exist)
    #[arg(long, global = true, default_value = "tictactoe_rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply a sequence of actions and print the resulting game
    Replay {
        /// Actions: a cell index 0-8, `jN` / `jump:N` to jump to step N, or `new`
        #[arg(value_name = "ACTION")]
        actions: Vec<Action>,

        /// Print the final state as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay_actions() {
        let cli = Cli::try_parse_from([
            "tictactoe_rewind",
            "replay",
            "0",
            "3",
            "j1",
            "new",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Command::Replay { actions, json } => {
                assert_eq!(
                    actions,
                    [Action::Place(0), Action::Place(3), Action::JumpTo(1), Action::NewGame]
                );
                assert!(json);
            }
            Command::Play => panic!("expected replay"),
        }
        assert_eq!(cli.config, PathBuf::from("tictactoe_rewind.toml"));
    }

    #[test]
    fn test_rejects_unknown_action() {
        assert!(Cli::try_parse_from(["tictactoe_rewind", "replay", "x"]).is_err());
    }
}
