//! Game state with full move history.
//!
//! A [`GameState`] is a value: the controller never edits one in place, it
//! builds the next state and the owner replaces the old one wholesale.

use super::{Board, Player};
use serde::Serialize;

/// Whether moves are still accepted at the current step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Phase {
    /// No winning line at the current step.
    InProgress,
    /// The current snapshot holds a winning line for this player.
    Won(Player),
}

/// History of board snapshots plus a pointer to the one being shown.
///
/// - `history[0]` is always the empty board and `history` is never empty.
/// - `current_step` always indexes into `history`.
/// - The next player is derived from the parity of `current_step` and
///   is never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) current_step: usize,
}

impl GameState {
    /// The initial state: one empty board, step 0, X to move.
    pub fn new() -> Self {
        Self {
            history: vec![Board::new()],
            current_step: 0,
        }
    }

    /// All snapshots, step 0 first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// Index of the snapshot being shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The snapshot at `current_step`.
    pub fn current(&self) -> &Board {
        &self.history[self.current_step]
    }

    /// Player whose mark the next move places.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Winner at the current step, if any.
    pub fn winner(&self) -> Option<Player> {
        self.current().winner()
    }

    /// Phase at the current step.
    pub fn phase(&self) -> Phase {
        match self.winner() {
            Some(player) => Phase::Won(player),
            None => Phase::InProgress,
        }
    }

    /// Number of snapshots, including the empty board.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always `false`; present for symmetry with [`GameState::len`].
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// True when steps after `current_step` exist (after a jump back).
    pub fn has_future(&self) -> bool {
        self.current_step + 1 < self.history.len()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
