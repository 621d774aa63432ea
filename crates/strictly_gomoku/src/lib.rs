//! Pure five-in-a-row game logic.
//!
//! A 10x10 board where X and O alternate placing marks. After each
//! placement only the four lines through the new mark are scanned; a run
//! of five or more wins.
//!
//! ```
//! use strictly_gomoku::{Game, Player};
//!
//! let mut game = Game::new();
//! for col in 0..4 {
//!     game.place_mark(0, col); // X
//!     game.place_mark(9, col); // O
//! }
//! let placement = game.place_mark(0, 4).unwrap();
//! assert_eq!(placement.win().map(|line| line.cells().len()), Some(5));
//! assert_eq!(game.winner(), Some(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod axis;
mod game;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveError};
pub use axis::Axis;
pub use game::{Game, GameStatus, Placement};
pub use position::{ParsePositionError, Position};
pub use rules::WinLine;
pub use types::{Board, Player, Square, BOARD_SIZE, WIN_LENGTH};
