//! Events crossing the boundary between the game and its front ends.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strictly_gomoku::{ParsePositionError, Player, Position};

/// A discrete user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Input {
    /// A cell was clicked or selected.
    ///
    /// Coordinates are not bounds-checked here; off-board cells are ignored
    /// by the game like any other invalid activation.
    CellActivated {
        /// Row of the activated cell.
        row: usize,
        /// Column of the activated cell.
        col: usize,
    },
    /// Start a new game.
    Restart,
}

impl FromStr for Input {
    type Err = InputParseError;

    /// Parses `restart` or `row,col`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("restart") {
            return Ok(Input::Restart);
        }

        // Off-board cells still become activations; the game ignores them.
        match s.parse::<Position>() {
            Ok(pos) => Ok(Input::CellActivated {
                row: pos.row(),
                col: pos.col(),
            }),
            Err(ParsePositionError::OutOfBounds { row, col }) => {
                Ok(Input::CellActivated { row, col })
            }
            Err(ParsePositionError::Format(_)) => Err(InputParseError(s.to_string())),
        }
    }
}

/// Text that is neither `restart` nor `row,col`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("expected `row,col` or `restart`, got {:?}", _0)]
pub struct InputParseError(pub String);

impl std::error::Error for InputParseError {}

/// Something the front end must show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// Render `symbol` in a cell.
    Placed {
        /// Row of the new mark.
        row: usize,
        /// Column of the new mark.
        col: usize,
        /// Mark to draw.
        symbol: Player,
    },
    /// Highlight `line` and announce `winner`.
    Won {
        /// Winning player.
        winner: Player,
        /// Cells of the winning line in order.
        line: Vec<Position>,
    },
    /// The board filled up without a winner.
    Drawn,
    /// Blank every cell and drop any highlight.
    Cleared,
}
