//! Application state and key handling.

use crossterm::event::KeyCode;
use tictactoe_core::{Action, GameState, GameView, Position, controller};
use tracing::{debug, instrument, warn};

use super::input::{digit_cell, move_cursor};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

impl Focus {
    /// Switches to the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
///
/// Owns the only [`GameState`] and replaces it wholesale on every action.
#[derive(Debug, Clone)]
pub struct App {
    state: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// View model for the current state.
    pub fn view(&self) -> GameView {
        GameView::from_state(&self.state)
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted entry of the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(cell) = digit_cell(key) {
            self.dispatch(Action::Place(cell));
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.dispatch(Action::NewGame),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected_step = self.state.current_step();
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(Action::Place(self.cursor.to_index()))
            }
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.selected_step = self.selected_step.saturating_sub(1),
            KeyCode::Down => {
                self.selected_step = (self.selected_step + 1).min(self.state.len() - 1)
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.dispatch(Action::JumpTo(self.selected_step))
            }
            _ => {}
        }
    }

    /// Applies an action and replaces the game state with the result.
    pub fn dispatch(&mut self, action: Action) {
        match controller::dispatch(&self.state, action) {
            Ok(next) => {
                debug!(%action, step = next.current_step(), "Action handled");
                self.state = next;
                self.selected_step = self.state.current_step();
            }
            Err(e) => warn!(error = %e, %action, "Action failed"),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
