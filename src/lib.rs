//! Strictly Five - five-in-a-row on a 10x10 board
//!
//! The rules live in the `strictly_gomoku` crate. This crate wires them
//! to front ends through an input/event boundary.
//!
//! # Architecture
//!
//! - **Controller**: owns the [`Game`] and turns [`Input`] into [`GameEvent`]s
//! - **Script**: headless driver reading commands and writing JSON-line events
//! - **TUI**: ratatui front end with mouse and keyboard play
//! - **Config**: optional TOML settings
//!
//! # Example
//!
//! ```
//! use strictly_five::{Controller, GameEvent, Input};
//!
//! let mut controller = Controller::new();
//! let events = controller.handle(Input::CellActivated { row: 3, col: 4 });
//! assert!(matches!(events[0], GameEvent::Placed { row: 3, col: 4, .. }));
//! assert_eq!(controller.handle(Input::Restart), vec![GameEvent::Cleared]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod controller;
mod events;
mod script;

pub mod tui;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Presentation boundary
pub use controller::Controller;
pub use events::{GameEvent, Input, InputParseError};

// Crate-level exports - Headless driver
pub use script::{run_script, ScriptSummary};

// Crate-level exports - Game types
pub use strictly_gomoku::{
    Axis, Board, Game, GameStatus, Move, MoveError, Placement, Player, Position, Square,
    WinLine, BOARD_SIZE, WIN_LENGTH,
};
