//! One-mark-per-step invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::{GameState, Player, Position, Square};

/// Invariant: snapshot N has N marks, and differs from snapshot N-1 by a
/// single newly filled square holding the mark of the player for step N-1.
///
/// Together with the empty root this means X always moves first and the
/// players alternate along the whole history.
pub struct OneMarkPerStepInvariant;

impl Invariant<GameState> for OneMarkPerStepInvariant {
    fn holds(state: &GameState) -> bool {
        let counts_match = state
            .history
            .iter()
            .enumerate()
            .all(|(step, board)| board.filled_count() == step);
        if !counts_match {
            return false;
        }

        state.history.windows(2).enumerate().all(|(step, pair)| {
            let mover = Square::Occupied(Player::for_step(step));
            let changed: Vec<Position> = Position::ALL
                .into_iter()
                .filter(|pos| pair[0].get(*pos) != pair[1].get(*pos))
                .collect();
            match changed.as_slice() {
                [pos] => pair[0].is_empty(*pos) && pair[1].get(*pos) == mover,
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each step fills exactly one empty square with the mover's mark"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller;

    #[test]
    fn test_new_game_holds() {
        assert!(OneMarkPerStepInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let state = controller::replay_cells(&[0, 1, 2, 4, 3, 5, 7, 6, 8]).unwrap();
        assert_eq!(state.current().filled_count(), 9);
        assert!(OneMarkPerStepInvariant::holds(&state));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut state = controller::replay_cells(&[4, 0]).unwrap();
        // O takes over X's center instead of only filling a new square.
        state.history[2] = state.history[1]
            .with(Position::Center, Square::Occupied(Player::O))
            .with(Position::TopLeft, Square::Occupied(Player::O));
        assert_eq!(state.history[2].filled_count(), 2);
        assert!(!OneMarkPerStepInvariant::holds(&state));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = controller::replay_cells(&[4]).unwrap();
        let twice = state.history[1].with(Position::TopLeft, Square::Occupied(Player::X));
        state.history.push(twice);
        assert!(!OneMarkPerStepInvariant::holds(&state));
    }
}
