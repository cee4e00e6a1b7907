//! User requests and their failure modes.
//!
//! An [`Action`] is the player's intent, decoupled from the view that
//! produced it, so it can be parsed, logged and replayed.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A request to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Action {
    /// Place the next player's mark at a cell index (0-8).
    #[display("place {}", _0)]
    Place(usize),
    /// Show the snapshot at this step.
    #[display("jump to step {}", _0)]
    JumpTo(usize),
    /// Discard all history and start over.
    #[display("new game")]
    NewGame,
}

impl FromStr for Action {
    type Err = ActionParseError;

    /// Parses `"0"`-`"8"`, `"jN"`, `"jump:N"` or `"new"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("new") {
            return Ok(Action::NewGame);
        }

        let step = s
            .strip_prefix("jump:")
            .or_else(|| s.strip_prefix('j'));
        if let Some(step) = step {
            return step
                .parse()
                .map(Action::JumpTo)
                .map_err(|_| ActionParseError(s.to_string()));
        }

        s.parse()
            .map(Action::Place)
            .map_err(|_| ActionParseError(s.to_string()))
    }
}

/// Input that does not name an action.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Unrecognized action {:?} (expected 0-8, jN, jump:N or new)", _0)]
pub struct ActionParseError(#[error(not(source))] pub String);

/// Why a move was refused. Refused moves leave the state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The current snapshot already has a winner.
    #[display("Game is already won by {}", _0)]
    GameWon(#[error(not(source))] Player),
}

/// Error returned for requests no view should ever send.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ControlError {
    /// Cell index above 8.
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    CellOutOfRange(#[error(not(source))] usize),

    /// Step past the end of the history.
    #[display("Step {} is out of range (history has {} steps)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },

    /// A transition produced a state that breaks a history invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions() {
        assert_eq!("4".parse::<Action>(), Ok(Action::Place(4)));
        assert_eq!(" 12 ".parse::<Action>(), Ok(Action::Place(12)));
        assert_eq!("j3".parse::<Action>(), Ok(Action::JumpTo(3)));
        assert_eq!("jump:0".parse::<Action>(), Ok(Action::JumpTo(0)));
        assert_eq!("NEW".parse::<Action>(), Ok(Action::NewGame));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for input in ["", "x", "j", "jump:", "-1", "jx"] {
            assert!(input.parse::<Action>().is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ControlError::StepOutOfRange { step: 5, len: 2 }.to_string(),
            "Step 5 is out of range (history has 2 steps)"
        );
        assert_eq!(
            Rejection::SquareOccupied(Position::Center).to_string(),
            "Square Center is already occupied"
        );
    }
}
