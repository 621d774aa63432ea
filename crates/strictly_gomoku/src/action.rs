//! Placements and the ways they can be refused.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One mark placed by `player` at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Whose mark.
    pub player: Player,
    /// Where it goes.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mv = Move::new(Player::O, Position::new(4, 7).unwrap());
        assert_eq!(mv.to_string(), "O -> (4, 7)");
    }

    #[test]
    fn test_error_display() {
        let pos = Position::new(1, 2).unwrap();
        assert_eq!(
            MoveError::SquareOccupied(pos).to_string(),
            "Square (1, 2) is already occupied"
        );
        assert_eq!(MoveError::WrongPlayer(Player::X).to_string(), "It's not X's turn");
    }
}
