//! Derived view model.
//!
//! Status text and move-list labels are computed from a [`GameState`] each
//! time a view renders, never stored alongside it.

use super::{GameState, Phase, Position, Square};
use serde::Serialize;

/// Label of the control that starts a new game.
pub const NEW_GAME_LABEL: &str = "New Game?";

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveEntry {
    /// Step this entry jumps to.
    pub step: usize,
    /// `"Go to game start."` or `"Go to move #N"`.
    pub label: String,
    /// Whether this is the step being shown.
    pub is_current: bool,
}

impl MoveEntry {
    /// Label for the move-list entry at `step`.
    pub fn label_for(step: usize) -> String {
        if step == 0 {
            "Go to game start.".to_string()
        } else {
            format!("Go to move #{}", step)
        }
    }
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    /// Squares of the current snapshot, row-major.
    pub squares: [Square; 9],
    /// Cells of the completed line, if the current snapshot is won.
    pub winning_line: Option<[Position; 3]>,
    /// `"Winner: <mark>"` or `"Next player: <mark>"`.
    pub status: String,
    /// One entry per history step.
    pub moves: Vec<MoveEntry>,
    /// Label of the new-game control.
    pub new_game_label: &'static str,
}

impl GameView {
    /// Derives the view for `state`.
    pub fn from_state(state: &GameState) -> Self {
        let current = state.current();
        let moves = (0..state.len())
            .map(|step| MoveEntry {
                step,
                label: MoveEntry::label_for(step),
                is_current: step == state.current_step(),
            })
            .collect();

        Self {
            squares: *current.squares(),
            winning_line: super::rules::winning_line(current).map(|(_, line)| line),
            status: status_line(state),
            moves,
            new_game_label: NEW_GAME_LABEL,
        }
    }
}

/// Status line for `state`.
pub fn status_line(state: &GameState) -> String {
    match state.phase() {
        Phase::Won(player) => format!("Winner: {}", player),
        Phase::InProgress => format!("Next player: {}", state.next_player()),
    }
}
