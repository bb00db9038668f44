//! Immutable game state and its move transition.

use super::contracts::{Contract, MoveContract};
use super::error::MoveError;
use super::rules::WinPattern;
use super::{Board, GameStatus, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
///
/// A value type: [`GameState::play`] returns the next state and never
/// mutates `self`. Whoever drives the game loop owns the current value and
/// replaces it after each accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    pub(super) board: Board,
    /// Player to move next.
    pub(super) current_player: Player,
    /// Game status, carrying the winning line when won.
    pub(super) status: GameStatus,
}

impl GameState {
    /// Creates a new game: empty board, X to move, active.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::Active,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    ///
    /// Frozen at the last mover once the game is decided.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// The completed line, present iff the status is a win.
    pub fn winning_line(&self) -> Option<&WinPattern> {
        self.status.winning_line()
    }

    /// Returns positions still open for play; empty once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_active() {
            Position::valid_moves(&self.board)
        } else {
            Vec::new()
        }
    }

    /// Plays the current player's mark at `(row, col)`.
    ///
    /// The move gate runs first; on rejection `self` is the unchanged
    /// state. On success the returned state holds the new board and status,
    /// and the turn passes to the opponent only while the game stays active.
    ///
    /// # Errors
    ///
    /// `GameOver`, `InvalidPosition` or `CellOccupied` from the gate. Debug
    /// builds also re-check the game invariants on the new state and return
    /// `InvariantViolation` if one fails.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&self, row: usize, col: usize) -> Result<GameState, MoveError> {
        let position = MoveContract::pre(self, &(row, col))?;

        let board = self.board.with_mark(position, self.current_player);
        let status = self.status.advance(&board, position);
        let current_player = if status.is_active() {
            self.current_player.opponent()
        } else {
            self.current_player
        };
        debug!(%position, %status, "Move applied");

        let next = GameState {
            board,
            current_player,
            status,
        };

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        Ok(next)
    }

    /// Plays the current player's mark at `position`.
    pub fn play_at(&self, position: Position) -> Result<GameState, MoveError> {
        self.play(position.row(), position.col())
    }

    /// Replays a sequence of moves from a new game, alternating from X.
    ///
    /// Stops at the first rejected move.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<GameState, MoveError> {
        moves
            .iter()
            .try_fold(GameState::new(), |state, pos| state.play_at(*pos))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
