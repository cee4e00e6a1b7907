//! Tic-tac-toe with move history and time travel.
//!
//! The whole game is a [`GameState`] value: an ordered history of immutable
//! board snapshots and the step currently shown. The [`controller`] turns a
//! state and a request into the next state:
//!
//! - [`controller::apply_move`] / [`controller::place`] fill a square for
//!   the player whose turn it is, discarding any steps after the current one;
//! - [`controller::jump_to`] shows an earlier (or later) snapshot;
//! - [`controller::new_game`] starts over.
//!
//! ```
//! use tictactoe_core::{GameState, Player, controller};
//!
//! let state = controller::replay_cells(&[0, 3, 1, 4, 2])?;
//! assert_eq!(state.winner(), Some(Player::X));
//!
//! let back = controller::jump_to(&state, 2)?;
//! assert_eq!(back.next_player(), Player::X);
//!
//! let branched = controller::apply_move(&back, 6)?;
//! assert_eq!(branched.len(), 4);
//! # Ok::<(), tictactoe_core::ControlError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod position;
mod state;
mod types;

pub mod contracts;
pub mod controller;
pub mod invariants;
pub mod rules;
pub mod view;

pub use action::{Action, ActionParseError, ControlError, Rejection};
pub use position::Position;
pub use rules::check_winner;
pub use state::{GameState, Phase};
pub use types::{Board, Player, Square};
pub use view::{GameView, MoveEntry};
