//! Step bounds invariant: the current step points into the history.

use super::Invariant;
use crate::GameState;

/// Invariant: `current_step < history.len()`.
pub struct StepInBoundsInvariant;

impl Invariant<GameState> for StepInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_step < state.history.len()
    }

    fn description() -> &'static str {
        "Current step indexes into the history"
    }
}
