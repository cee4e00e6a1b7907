//! Game rules applied to [`GameState`] values.
//!
//! Every operation borrows the current state and returns the next one; the
//! caller replaces its state wholesale.
//!
//! Error policy at this boundary:
//! - illegal moves (occupied square, move after a win) are ignored and the
//!   state comes back unchanged, as a view would simply not react to them;
//! - out-of-range cell indices and steps are reported as [`ControlError`],
//!   since no view should ever offer them.

use super::action::{Action, ControlError, Rejection};
use super::contracts::{Contract, MoveContract};
use super::{GameState, Position, Square};
use tracing::{debug, info, instrument};

/// Places the next player's mark at a raw cell index (0-8).
///
/// Returns the unchanged state for an occupied square or a won game.
///
/// # Errors
///
/// [`ControlError::CellOutOfRange`] above 8; in debug builds
/// [`ControlError::InvariantViolation`] if the new state breaks a history
/// invariant.
#[instrument(skip(state), fields(step = state.current_step()))]
pub fn apply_move(state: &GameState, cell: usize) -> Result<GameState, ControlError> {
    let pos = Position::from_index(cell).ok_or(ControlError::CellOutOfRange(cell))?;
    match transition(state, pos) {
        Ok(next) => {
            verify(state, &next)?;
            Ok(next)
        }
        Err(rejection) => Ok(ignore(state, rejection)),
    }
}

/// Places the next player's mark at `pos`, ignoring illegal moves.
#[instrument(skip(state), fields(step = state.current_step()))]
pub fn place(state: &GameState, pos: Position) -> GameState {
    match try_place(state, pos) {
        Ok(next) => next,
        Err(rejection) => ignore(state, rejection),
    }
}

/// Places the next player's mark at `pos`, reporting why a move is refused.
///
/// History after the current step is discarded before the new snapshot is
/// appended.
pub fn try_place(state: &GameState, pos: Position) -> Result<GameState, Rejection> {
    let next = transition(state, pos)?;
    debug_assert!(
        verify(state, &next).is_ok(),
        "move broke a history invariant: {:?}",
        verify(state, &next)
    );
    Ok(next)
}

/// Shows the snapshot at `step`. The history is kept as is, including
/// steps after `step`, until the next move truncates it.
///
/// # Errors
///
/// [`ControlError::StepOutOfRange`] when `step` is not in the history.
#[instrument(skip(state), fields(from = state.current_step()))]
pub fn jump_to(state: &GameState, step: usize) -> Result<GameState, ControlError> {
    let len = state.history.len();
    if step >= len {
        return Err(ControlError::StepOutOfRange { step, len });
    }
    debug!(step, "Jumping to step");
    Ok(GameState {
        history: state.history.clone(),
        current_step: step,
    })
}

/// Discards all history and returns the initial state.
#[instrument(skip(state), fields(discarded = state.history.len()))]
pub fn new_game(state: &GameState) -> GameState {
    info!("Starting new game");
    GameState::new()
}

/// Routes an [`Action`] to the matching operation.
pub fn dispatch(state: &GameState, action: Action) -> Result<GameState, ControlError> {
    match action {
        Action::Place(cell) => apply_move(state, cell),
        Action::JumpTo(step) => jump_to(state, step),
        Action::NewGame => Ok(new_game(state)),
    }
}

/// Folds `actions` over a new game.
#[instrument(skip(actions))]
pub fn replay<I>(actions: I) -> Result<GameState, ControlError>
where
    I: IntoIterator<Item = Action>,
{
    actions
        .into_iter()
        .try_fold(GameState::new(), |state, action| dispatch(&state, action))
}

/// Replays a sequence of cell indices from a new game.
pub fn replay_cells(cells: &[usize]) -> Result<GameState, ControlError> {
    replay(cells.iter().copied().map(Action::Place))
}

/// Builds the next state, or the precondition that refused it.
fn transition(state: &GameState, pos: Position) -> Result<GameState, Rejection> {
    MoveContract::pre(state, &pos)?;

    let current = state.current();
    let snapshot = current.with(pos, Square::Occupied(state.next_player()));

    let mut history = state.history[..=state.current_step].to_vec();
    history.push(snapshot);
    let current_step = history.len() - 1;

    debug!(
        position = %pos,
        player = %state.next_player(),
        discarded = state.history.len() - (state.current_step + 1),
        "Move applied"
    );

    Ok(GameState {
        history,
        current_step,
    })
}

/// Postcondition check, run in debug builds only.
fn verify(before: &GameState, after: &GameState) -> Result<(), ControlError> {
    if cfg!(debug_assertions) {
        MoveContract::post(before, after)
    } else {
        Ok(())
    }
}

fn ignore(state: &GameState, rejection: Rejection) -> GameState {
    debug!(%rejection, "Move ignored");
    state.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Phase, Player};

    #[test]
    fn test_move_appends_snapshot() {
        let state = apply_move(&GameState::new(), 4).unwrap();
        assert_eq!(state.len(), 2);
        assert_eq!(state.current_step(), 1);
        assert_eq!(state.current().get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(state.next_player(), Player::O);
    }

    #[test]
    fn test_occupied_square_is_ignored() {
        let state = apply_move(&GameState::new(), 4).unwrap();
        assert_eq!(apply_move(&state, 4).unwrap(), state);
        assert_eq!(
            try_place(&state, Position::Center),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_cell_out_of_range_is_reported() {
        assert_eq!(
            apply_move(&GameState::new(), 9),
            Err(ControlError::CellOutOfRange(9))
        );
    }

    #[test]
    fn test_jump_out_of_range_is_reported() {
        let state = replay_cells(&[0, 1]).unwrap();
        assert_eq!(
            jump_to(&state, 3),
            Err(ControlError::StepOutOfRange { step: 3, len: 3 })
        );
    }

    #[test]
    fn test_jump_keeps_future_until_next_move() {
        let state = replay_cells(&[0, 1, 2]).unwrap();
        let back = jump_to(&state, 1).unwrap();
        assert_eq!(back.len(), 4);
        assert!(back.has_future());
        assert_eq!(back.next_player(), Player::O);

        let branched = place(&back, Position::Center);
        assert_eq!(branched.len(), 3);
        assert_eq!(branched.current_step(), 2);
        assert_eq!(branched.history()[..2], state.history()[..2]);
        assert!(branched.current().is_empty(Position::TopCenter));
    }

    #[test]
    fn test_win_blocks_moves_until_jump() {
        let won = replay_cells(&[0, 3, 1, 4, 2]).unwrap();
        assert_eq!(won.phase(), Phase::Won(Player::X));
        assert_eq!(place(&won, Position::BottomRight), won);

        let back = jump_to(&won, 4).unwrap();
        assert_eq!(back.phase(), Phase::InProgress);
        let resumed = place(&back, Position::BottomRight);
        assert_eq!(resumed.len(), 6);
        assert_eq!(resumed.winner(), None);
    }

    #[test]
    fn test_dispatch_routes_actions() {
        let state = dispatch(&GameState::new(), Action::Place(0)).unwrap();
        let state = dispatch(&state, Action::JumpTo(0)).unwrap();
        assert_eq!(state.current_step(), 0);
        assert_eq!(state.len(), 2);
        assert_eq!(dispatch(&state, Action::NewGame).unwrap(), GameState::new());
    }

    #[test]
    fn test_replay_stops_at_first_error() {
        let result = replay([Action::Place(0), Action::JumpTo(7), Action::Place(1)]);
        assert_eq!(result, Err(ControlError::StepOutOfRange { step: 7, len: 2 }));
    }
}
