//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first complete line in [`LINES`] order, or
/// `None`. Pure and total: any board is accepted, legal or not.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

/// Like [`check_winner`], also returning the completed line.
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return sq.player().map(|player| (player, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, cells: &[Position]) -> Board {
        cells
            .iter()
            .fold(Board::new(), |b, pos| b.with(*pos, Square::Occupied(player)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(player, &line);
                assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
                assert_eq!(winning_line(&board), Some((player, line)));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter])
            .with(Position::TopRight, Square::Occupied(Player::O));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::Center]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_without_line() {
        // X O X / X O O / O X X
        use Player::{O, X};
        let marks = [X, O, X, X, O, O, O, X, X];
        let board = Board::from_squares(marks.map(Square::Occupied));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Illegal board with two complete lines: the top row is checked first.
        let bottom = [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ];
        let board = board_with(Player::O, &bottom)
            .with(Position::TopLeft, Square::Occupied(Player::X))
            .with(Position::TopCenter, Square::Occupied(Player::X))
            .with(Position::TopRight, Square::Occupied(Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
