//! Application state and logic.

use crate::controller::Controller;
use crate::events::{GameEvent, Input};
use crossterm::event::KeyCode;
use strictly_gomoku::{Game, Player, Position, BOARD_SIZE};
use tracing::debug;

use super::input::move_cursor;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the terminal UI.
    Quit,
}

/// Main application state.
pub struct App {
    controller: Controller,
    cursor: Position,
    status_message: String,
    announcement: Option<String>,
    show_coordinates: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(show_coordinates: bool) -> Self {
        Self {
            controller: Controller::new(),
            cursor: Position::new(BOARD_SIZE / 2 - 1, BOARD_SIZE / 2 - 1).unwrap_or_default(),
            status_message: turn_message(Player::X),
            announcement: None,
            show_coordinates,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        self.controller.game()
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Gets the pop-up result notification, if one is showing.
    pub fn announcement(&self) -> Option<&str> {
        self.announcement.as_deref()
    }

    /// Whether row and column labels are drawn.
    pub fn show_coordinates(&self) -> bool {
        self.show_coordinates
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        if self.announcement.take().is_some() {
            debug!(?key, "Dismissed announcement");
            return Flow::Continue;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
            KeyCode::Char('r') => self.dispatch(Input::Restart),
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.cursor),
            other => self.cursor = move_cursor(self.cursor, other),
        }
        Flow::Continue
    }

    /// Handles a click that landed on `pos`.
    pub fn click(&mut self, pos: Position) {
        if self.announcement.take().is_some() {
            return;
        }
        self.cursor = pos;
        self.activate(pos);
    }

    fn activate(&mut self, pos: Position) {
        self.dispatch(Input::CellActivated {
            row: pos.row(),
            col: pos.col(),
        });
    }

    fn dispatch(&mut self, input: Input) {
        let events = self.controller.handle(input);
        if events.is_empty() {
            debug!(?input, "Input ignored");
            return;
        }
        for event in events {
            self.apply(event);
        }
    }

    /// Applies a game event to the display state.
    fn apply(&mut self, event: GameEvent) {
        debug!(?event, "Handling game event");

        match event {
            GameEvent::Placed { symbol, .. } => {
                self.status_message = turn_message(symbol.opponent());
            }
            GameEvent::Won { winner, .. } => {
                self.status_message =
                    format!("{} wins! Press 'r' to play again or 'q' to quit.", winner);
                self.announcement = Some(format!("{} is winner!", winner));
            }
            GameEvent::Drawn => {
                self.status_message =
                    "Board full, nobody wins. Press 'r' to play again or 'q' to quit.".to_string();
                self.announcement = Some("Draw!".to_string());
            }
            GameEvent::Cleared => {
                self.status_message = format!("New game. {}", turn_message(Player::X));
                self.announcement = None;
            }
        }
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {}'s turn", player)
}
