//! Single owner of the game state.
//!
//! Front ends feed [`Input`]s in one at a time and render the
//! [`GameEvent`]s that come back. Ignored input produces no events.

use crate::events::{GameEvent, Input};
use strictly_gomoku::{Game, GameStatus};
use tracing::{debug, info, instrument};

/// Translates user input into game transitions and display events.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    game: Game,
}

impl Controller {
    /// Creates a controller with a fresh game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Handles one input event to completion.
    #[instrument(skip(self))]
    pub fn handle(&mut self, input: Input) -> Vec<GameEvent> {
        match input {
            Input::CellActivated { row, col } => self.activate(row, col),
            Input::Restart => {
                self.game.restart();
                vec![GameEvent::Cleared]
            }
        }
    }

    fn activate(&mut self, row: usize, col: usize) -> Vec<GameEvent> {
        let Some(placement) = self.game.place_mark(row, col) else {
            debug!(row, col, "Activation ignored");
            return Vec::new();
        };

        let mv = placement.mv();
        let mut events = vec![GameEvent::Placed {
            row: mv.position.row(),
            col: mv.position.col(),
            symbol: mv.player,
        }];

        if let Some(line) = placement.win() {
            info!(winner = %line.player(), "Game won");
            events.push(GameEvent::Won {
                winner: line.player(),
                line: line.cells().to_vec(),
            });
        } else if self.game.status() == GameStatus::Draw {
            info!("Game drawn");
            events.push(GameEvent::Drawn);
        }

        events
    }
}
