//! Draw detection logic for five-in-a-row.

use super::super::{Board, BOARD_SIZE};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.filled() == BOARD_SIZE * BOARD_SIZE
}

#[cfg(test)]
mod tests {
    use super::super::super::{Player, Position, Square};
    use super::*;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_one_gap_not_full() {
        let mut board = Board::new();
        for pos in Position::all().skip(1) {
            board.set(pos, Square::Occupied(Player::X));
        }
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for pos in Position::all() {
            board.set(pos, Square::Occupied(Player::O));
        }
        assert!(is_full(&board));
    }
}
