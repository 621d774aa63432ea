//! Balanced marks invariant: X is never behind O and never more than one ahead.

use super::super::{Game, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: X count equals O count, or exceeds it by exactly one.
pub struct BalancedMarksInvariant;

impl Invariant<Game> for BalancedMarksInvariant {
    fn holds(game: &Game) -> bool {
        let x_count = game.board().count(Player::X);
        let o_count = game.board().count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O, or exactly one more"
    }
}
