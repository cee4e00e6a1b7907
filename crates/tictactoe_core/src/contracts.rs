//! Contract-based validation for moves.
//!
//! A move is checked against preconditions before it is applied and the
//! resulting state against postconditions after: {P} place {Q}.

use super::action::{ControlError, Rejection};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::{GameState, Position};
use tracing::{instrument, warn};

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Error reported when the precondition fails.
    type Rejected;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Self::Rejected>;

    /// Checks postconditions relating the state before and after.
    fn post(before: &S, after: &S) -> Result<(), ControlError>;
}

/// Precondition: the current snapshot has no winning line.
pub struct NoWinner;

impl NoWinner {
    /// Fails with [`Rejection::GameWon`] once a line is complete.
    #[instrument(level = "trace", skip(state))]
    pub fn check(state: &GameState) -> Result<(), Rejection> {
        match state.winner() {
            Some(player) => Err(Rejection::GameWon(player)),
            None => Ok(()),
        }
    }
}

/// Precondition: the square at the move's position is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`Rejection::SquareOccupied`] for a filled square.
    #[instrument(level = "trace", skip(state))]
    pub fn check(state: &GameState, pos: Position) -> Result<(), Rejection> {
        if state.current().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(pos))
        }
    }
}

/// Composite precondition: no winner yet and the square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all move preconditions, winner first.
    pub fn check(state: &GameState, pos: Position) -> Result<(), Rejection> {
        NoWinner::check(state)?;
        SquareIsEmpty::check(state, pos)
    }
}

/// Contract for placing a mark from the current step.
///
/// Postconditions:
/// - steps up to the old current step are kept unchanged
/// - exactly one snapshot follows them and it is the new current step
/// - every history invariant holds
pub struct MoveContract;

impl Contract<GameState, Position> for MoveContract {
    type Rejected = Rejection;

    fn pre(state: &GameState, pos: &Position) -> Result<(), Rejection> {
        LegalMove::check(state, *pos)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), ControlError> {
        let kept = before.current_step + 1;
        if after.history.len() != kept + 1 || after.current_step != kept {
            warn!(
                before_step = before.current_step,
                after_len = after.history.len(),
                after_step = after.current_step,
                "Move did not truncate and append"
            );
            return Err(ControlError::InvariantViolation(
                "Move must keep steps up to the current one and append exactly one".to_string(),
            ));
        }

        if after.history[..kept] != before.history[..kept] {
            return Err(ControlError::InvariantViolation(
                "Move rewrote an earlier snapshot".to_string(),
            ));
        }

        HistoryInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            ControlError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Square, controller};

    #[test]
    fn test_precondition_empty_square() {
        let state = GameState::new();
        assert!(MoveContract::pre(&state, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let state = controller::place(&GameState::new(), Position::Center);
        assert_eq!(
            MoveContract::pre(&state, &Position::Center),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_after_win_reports_winner_first() {
        let state = controller::replay_cells(&[0, 3, 1, 4, 2]).unwrap();
        // Occupied square and finished game: the win is reported.
        assert_eq!(
            LegalMove::check(&state, Position::TopLeft),
            Err(Rejection::GameWon(Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameState::new();
        let after = controller::place(&before, Position::Center);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameState::new();
        let mut after = controller::place(&before, Position::Center);
        after.history[1] = Board::new().with(Position::TopLeft, Square::Occupied(Player::O));
        assert!(MoveContract::post(&before, &after).is_err());
    }

    #[test]
    fn test_postcondition_detects_missing_truncation() {
        let before = controller::replay_cells(&[0, 1, 2]).unwrap();
        let before = controller::jump_to(&before, 1).unwrap();
        // Appending without truncating keeps the stale future.
        let mut after = before.clone();
        let next = after.current().with(Position::Center, Square::Occupied(Player::O));
        after.history.push(next);
        after.current_step = after.history.len() - 1;
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
