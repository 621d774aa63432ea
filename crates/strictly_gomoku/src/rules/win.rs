//! Win detection logic for five-in-a-row.
//!
//! Only the lines through the last move can have changed, so detection
//! walks outward from that square instead of scanning the whole board.

use super::super::{Axis, Board, Player, Position, Square, WIN_LENGTH};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A contiguous run of at least [`WIN_LENGTH`] marks along one axis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine {
    axis: Axis,
    player: Player,
    cells: Vec<Position>,
}

impl WinLine {
    /// Axis the line runs along.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Player owning every cell in the line.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Cells of the line, ordered from the backward end of the axis.
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Returns true if `pos` is part of the line.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

/// Collects the run of same-mark squares through `origin` along `axis`.
///
/// The result includes `origin` and is ordered from the backward end of the
/// axis to the forward end. An empty origin yields an empty run.
#[instrument(skip(board))]
pub fn collect_line(board: &Board, origin: Position, axis: Axis) -> Vec<Position> {
    let mark = board.get(origin);
    if mark == Square::Empty {
        return Vec::new();
    }

    let walk = |step: (isize, isize)| {
        std::iter::successors(origin.step(step), move |pos| pos.step(step))
            .take_while(|pos| board.get(*pos) == mark)
            .collect::<Vec<_>>()
    };

    let mut line = walk(axis.backward());
    line.reverse();
    line.push(origin);
    line.extend(walk(axis.forward()));
    line
}

/// Checks whether the mark at `last` completes a winning line.
///
/// Axes are tried in [`Axis::ALL`] order and the first run of at least
/// [`WIN_LENGTH`] squares is returned.
#[instrument(skip(board))]
pub fn detect_win(board: &Board, last: Position) -> Option<WinLine> {
    let player = board.get(last).player()?;

    Axis::ALL.into_iter().find_map(|axis| {
        let cells = collect_line(board, last, axis);
        debug!(%axis, len = cells.len(), "Scanned axis");
        (cells.len() >= WIN_LENGTH).then(|| WinLine {
            axis,
            player,
            cells,
        })
    })
}
