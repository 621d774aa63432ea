//! Game rules for five-in-a-row.
//!
//! Pure functions over a [`Board`](super::Board). Rules are kept apart from
//! board storage so the game engine and the contracts can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{collect_line, detect_win, WinLine};
