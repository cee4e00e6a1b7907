//! History root invariant: the first snapshot is the empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: history is non-empty and starts with the empty board.
pub struct HistoryRootedInvariant;

impl Invariant<GameState> for HistoryRootedInvariant {
    fn holds(state: &GameState) -> bool {
        state.history.first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(HistoryRootedInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_marked_root_violates() {
        let mut state = GameState::new();
        state.history[0] = Board::new().with(Position::Center, Square::Occupied(Player::X));
        assert!(!HistoryRootedInvariant::holds(&state));
    }

    #[test]
    fn test_empty_history_violates() {
        let mut state = GameState::new();
        state.history.clear();
        assert!(!HistoryRootedInvariant::holds(&state));
    }
}
