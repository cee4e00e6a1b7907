//! Plain-text rendering of a [`GameView`].

use std::fmt::Write;
use tictactoe_core::{GameView, Player, Square};

/// Renders the grid, status line and move list as text.
///
/// Empty cells show as `.`; the move being shown is marked with `>`.
pub fn render_text(view: &GameView) -> String {
    let mut out = String::new();

    for (row, cells) in view.squares.chunks(3).enumerate() {
        let line: Vec<&str> = cells.iter().map(|sq| symbol(*sq)).collect();
        out.push_str(&line.join(" | "));
        out.push('\n');
        if row < 2 {
            out.push_str("--+---+--\n");
        }
    }

    out.push('\n');
    out.push_str(&view.status);
    out.push('\n');
    out.push('\n');

    for entry in &view.moves {
        let marker = if entry.is_current { '>' } else { ' ' };
        writeln!(out, "{} {}. {}", marker, entry.step + 1, entry.label).ok();
    }

    writeln!(out, "\n[{}]", view.new_game_label).ok();
    out
}

fn symbol(square: Square) -> &'static str {
    match square {
        Square::Empty => ".",
        Square::Occupied(Player::X) => "X",
        Square::Occupied(Player::O) => "O",
    }
}
