//! Tic-tac-toe with move history and time travel, in the terminal.
//!
//! Game logic lives in [`tictactoe_core`]; this crate adds the front ends:
//!
//! - **TUI**: ratatui board, status line and keyboard-driven move list
//! - **Replay**: apply a list of actions and print the result as text or JSON
//! - **Config**: TOML settings for colors and logging, installed by [`init_tracing`]
//!
//! # Example
//!
//! ```
//! use tictactoe_rewind::{GameView, controller, render_text};
//!
//! let state = controller::replay_cells(&[4, 0])?;
//! let text = render_text(&GameView::from_state(&state));
//! assert!(text.contains("Next player: X"));
//! # Ok::<(), tictactoe_rewind::ControlError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod render;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, MarkColor};

// Crate-level exports - Logging
pub use logging::{LogTarget, init_tracing};

// Crate-level exports - Rendering
pub use render::render_text;

// Crate-level exports - Terminal UI
pub use tui::{App, Focus, digit_cell, draw, move_cursor, run_tui};

// Crate-level exports - Game types
pub use tictactoe_core::{
    Action, Board, ControlError, GameState, GameView, MoveEntry, Phase, Player, Position,
    Rejection, Square, controller,
};
