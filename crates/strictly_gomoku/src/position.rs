//! Board coordinates.

use super::types::BOARD_SIZE;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A position on the board, `row` and `col` both in `0..BOARD_SIZE`.
///
/// The only way to build one is through a bounds check, so a `Position`
/// can always index a [`Board`](crate::Board) directly.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "[usize; 2]", into = "[usize; 2]")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position, or `None` if it falls off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some(Self { row, col })
    }

    /// Row index, 0 at the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column index, 0 at the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Moves one step by `(d_row, d_col)`, or `None` at the board edge.
    pub fn step(self, (d_row, d_col): (isize, isize)) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col)
    }

    /// Iterates every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Position { row, col }))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<Position> for [usize; 2] {
    fn from(pos: Position) -> Self {
        [pos.row, pos.col]
    }
}

impl TryFrom<[usize; 2]> for Position {
    type Error = ParsePositionError;

    fn try_from([row, col]: [usize; 2]) -> Result<Self, Self::Error> {
        Position::new(row, col).ok_or(ParsePositionError::OutOfBounds { row, col })
    }
}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parses `row,col`, whitespace around either number allowed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| ParsePositionError::Format(s.to_string()))?;
        let row = row
            .trim()
            .parse::<usize>()
            .map_err(|_| ParsePositionError::Format(s.to_string()))?;
        let col = col
            .trim()
            .parse::<usize>()
            .map_err(|_| ParsePositionError::Format(s.to_string()))?;
        Position::try_from([row, col])
    }
}

/// Error returned when text or raw indices do not name a board position.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParsePositionError {
    /// Text was not two comma-separated numbers.
    #[display("expected `row,col`, got {:?}", _0)]
    Format(String),

    /// Indices fall outside the board.
    #[display("position ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for ParsePositionError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(Position::new(0, 0).is_some());
        assert!(Position::new(9, 9).is_some());
        assert!(Position::new(10, 0).is_none());
        assert!(Position::new(0, 10).is_none());
    }

    #[test]
    fn test_step_stops_at_edges() {
        let corner = Position::new(0, 0).unwrap();
        assert_eq!(corner.step((-1, 0)), None);
        assert_eq!(corner.step((0, -1)), None);
        assert_eq!(corner.step((1, 1)), Position::new(1, 1));

        let far = Position::new(9, 9).unwrap();
        assert_eq!(far.step((1, 0)), None);
        assert_eq!(far.step((-1, 1)), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!("3,7".parse::<Position>(), Ok(Position::new(3, 7).unwrap()));
        assert_eq!(" 0 , 9 ".parse::<Position>(), Ok(Position::new(0, 9).unwrap()));
        assert_eq!(
            "3;7".parse::<Position>(),
            Err(ParsePositionError::Format("3;7".to_string()))
        );
        assert_eq!(
            "10,2".parse::<Position>(),
            Err(ParsePositionError::OutOfBounds { row: 10, col: 2 })
        );
    }

    #[test]
    fn test_all_covers_board() {
        assert_eq!(Position::all().count(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(Position::all().next(), Position::new(0, 0));
        assert_eq!(Position::all().last(), Position::new(9, 9));
    }

    #[test]
    fn test_serde_as_pair() {
        let pos = Position::new(2, 5).unwrap();
        assert_eq!(serde_json::to_string(&pos).unwrap(), "[2,5]");
        assert_eq!(serde_json::from_str::<Position>("[2,5]").unwrap(), pos);
        assert!(serde_json::from_str::<Position>("[2,11]").is_err());
    }
}
