//! First-class invariants over the game history.
//!
//! Invariants are logical properties every reachable [`GameState`](crate::GameState)
//! satisfies. They are checked after each move in debug builds and can be
//! tested on their own.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod history_rooted;
pub mod no_move_after_win;
pub mod one_mark_per_step;
pub mod step_in_bounds;

pub use history_rooted::HistoryRootedInvariant;
pub use no_move_after_win::NoMoveAfterWinInvariant;
pub use one_mark_per_step::OneMarkPerStepInvariant;
pub use step_in_bounds::StepInBoundsInvariant;

/// All history invariants as a composable set.
pub type HistoryInvariants = (
    HistoryRootedInvariant,
    StepInBoundsInvariant,
    OneMarkPerStepInvariant,
    NoMoveAfterWinInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameState, controller};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(HistoryInvariants::check_all(&GameState::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let state = controller::replay_cells(&[4, 0, 8, 2]).unwrap();
        let state = controller::jump_to(&state, 1).unwrap();
        assert!(HistoryInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let state = GameState {
            history: Vec::new(),
            current_step: 3,
        };
        let violations = HistoryInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].description, HistoryRootedInvariant::description());
        assert_eq!(violations[1].description, StepInBoundsInvariant::description());
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Bounds = (HistoryRootedInvariant, StepInBoundsInvariant);
        assert!(Bounds::check_all(&GameState::new()).is_ok());
    }
}
