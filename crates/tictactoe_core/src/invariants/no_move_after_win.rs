//! Terminal-win invariant: nothing follows a won snapshot.

use super::Invariant;
use crate::GameState;

/// Invariant: only the last snapshot of the history may contain a
/// winning line.
pub struct NoMoveAfterWinInvariant;

impl Invariant<GameState> for NoMoveAfterWinInvariant {
    fn holds(state: &GameState) -> bool {
        match state.history.split_last() {
            Some((_, earlier)) => earlier.iter().all(|board| board.winner().is_none()),
            None => true,
        }
    }

    fn description() -> &'static str {
        "No snapshot follows a winning snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square, controller};

    #[test]
    fn test_won_game_holds() {
        let state = controller::replay_cells(&[0, 3, 1, 4, 2]).unwrap();
        assert!(state.winner().is_some());
        assert!(NoMoveAfterWinInvariant::holds(&state));
    }

    #[test]
    fn test_snapshot_after_win_violates() {
        let mut state = controller::replay_cells(&[0, 3, 1, 4, 2]).unwrap();
        let extra = state.current().with(Position::BottomRight, Square::Occupied(Player::O));
        state.history.push(extra);
        assert!(!NoMoveAfterWinInvariant::holds(&state));
    }
}
