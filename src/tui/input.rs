//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use strictly_gomoku::Position;

/// Moves cursor based on arrow keys or `hjkl`.
///
/// The cursor stays put at the board edge and on any other key.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let step = match key {
        KeyCode::Up | KeyCode::Char('k') => (-1, 0),
        KeyCode::Down | KeyCode::Char('j') => (1, 0),
        KeyCode::Left | KeyCode::Char('h') => (0, -1),
        KeyCode::Right | KeyCode::Char('l') => (0, 1),
        _ => return cursor,
    };
    cursor.step(step).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_arrows_and_vi_keys() {
        assert_eq!(move_cursor(pos(4, 4), KeyCode::Up), pos(3, 4));
        assert_eq!(move_cursor(pos(4, 4), KeyCode::Char('j')), pos(5, 4));
        assert_eq!(move_cursor(pos(4, 4), KeyCode::Left), pos(4, 3));
        assert_eq!(move_cursor(pos(4, 4), KeyCode::Char('l')), pos(4, 5));
    }

    #[test]
    fn test_edges_hold() {
        assert_eq!(move_cursor(pos(0, 0), KeyCode::Up), pos(0, 0));
        assert_eq!(move_cursor(pos(0, 0), KeyCode::Left), pos(0, 0));
        assert_eq!(move_cursor(pos(9, 9), KeyCode::Down), pos(9, 9));
        assert_eq!(move_cursor(pos(9, 9), KeyCode::Right), pos(9, 9));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(move_cursor(pos(2, 7), KeyCode::Char('x')), pos(2, 7));
        assert_eq!(move_cursor(pos(2, 7), KeyCode::Enter), pos(2, 7));
    }
}
