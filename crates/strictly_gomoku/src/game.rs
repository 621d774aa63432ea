//! Game engine for five-in-a-row.
//!
//! [`Game`] owns the board, the turn and the outcome. Every accepted
//! placement runs through [`PlaceContract`]: preconditions always,
//! postconditions in debug builds.

use super::action::{Move, MoveError};
use super::contracts::{Contract, PlaceContract};
use super::rules::{self, WinLine};
use super::types::{Board, Player, Square};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Board filled up with no winner.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            _ => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} is winner!", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// The result of an accepted placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    mv: Move,
    win: Option<WinLine>,
}

impl Placement {
    /// The move that was applied.
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// The winning line, if this move completed one.
    pub fn win(&self) -> Option<&WinLine> {
        self.win.as_ref()
    }

    /// Returns true if this move won the game.
    pub fn is_win(&self) -> bool {
        self.win.is_some()
    }
}

/// Five-in-a-row game state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
    pub(crate) win_line: Option<WinLine>,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            win_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose mark goes down next.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns the winning line, if any.
    pub fn win_line(&self) -> Option<&WinLine> {
        self.win_line.as_ref()
    }

    /// Returns the moves played since the last restart.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Places the current player's mark at `pos`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn
    /// - [`MoveError::SquareOccupied`] if `pos` is taken
    /// - [`MoveError::InvariantViolation`] if a postcondition fails (debug builds)
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn try_place(&mut self, pos: Position) -> Result<Placement, MoveError> {
        self.apply(Move::new(self.to_move, pos))
    }

    /// Places the current player's mark at `(row, col)`, ignoring invalid input.
    ///
    /// Off-board coordinates, occupied squares and any call after the game
    /// has ended return `None` and leave the game untouched.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, row: usize, col: usize) -> Option<Placement> {
        let Some(pos) = Position::new(row, col) else {
            debug!(row, col, "Ignoring off-board activation");
            return None;
        };

        match self.try_place(pos) {
            Ok(placement) => Some(placement),
            Err(e) => {
                debug!(error = %e, "Ignoring activation");
                None
            }
        }
    }

    /// Clears the board and hands the first move back to X.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(moves = self.history.len(), "Restarting game");
        *self = Self::new();
    }

    /// Replays moves from an empty board, validating each one.
    ///
    /// Unlike [`Game::try_place`], every move names its player, so an
    /// out-of-turn move is rejected with [`MoveError::WrongPlayer`].
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for action in moves {
            game.apply(*action)?;
        }
        Ok(game)
    }

    fn apply(&mut self, action: Move) -> Result<Placement, MoveError> {
        PlaceContract::pre(self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.board.set(action.position, Square::Occupied(action.player));
        self.history.push(action);
        self.to_move = action.player.opponent();

        let win = rules::detect_win(&self.board, action.position);
        if let Some(line) = &win {
            info!(winner = %line.player(), axis = %line.axis(), "Winning line completed");
            self.status = GameStatus::Won(line.player());
            self.win_line = Some(line.clone());
        } else if rules::is_full(&self.board) {
            info!("Board full, game drawn");
            self.status = GameStatus::Draw;
        }

        #[cfg(debug_assertions)]
        if let Err(e) = PlaceContract::post(&before, self) {
            *self = before;
            return Err(e);
        }

        debug!(%action, "Move applied");
        Ok(Placement { mv: action, win })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
