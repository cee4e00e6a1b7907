//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board), kept apart from state so
//! the controller and the contracts can share them.

pub mod win;

pub use win::{LINES, check_winner, winning_line};
