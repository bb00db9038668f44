//! Move rejection reasons.

use super::{GameStatus, Position};
use derive_more::{Display, Error};

/// Why a move was not applied.
///
/// Every variant is a local, recoverable rejection: the state the move was
/// attempted against is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Coordinates are outside the 3x3 board.
    #[display("Position ({}, {}) is off the board", row, col)]
    InvalidPosition {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square already holds a mark.
    #[display("Square {} is already occupied", position)]
    CellOccupied {
        /// The occupied square.
        position: Position,
    },

    /// The game has already been decided.
    #[display("Game is already over ({})", status)]
    GameOver {
        /// The terminal status that closed the game.
        status: GameStatus,
    },

    /// Another move is still being resolved.
    #[display("A move is already in progress")]
    MoveInProgress,

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {}", description)]
    InvariantViolation {
        /// Which invariants failed.
        description: String,
    },
}

impl MoveError {
    /// Stable kebab-case code for the rejection, suitable for UI lookups.
    pub fn code(&self) -> &'static str {
        match self {
            MoveError::InvalidPosition { .. } => "invalid-position",
            MoveError::CellOccupied { .. } => "cell-occupied",
            MoveError::GameOver { .. } => "game-over",
            MoveError::MoveInProgress => "move-in-progress",
            MoveError::InvariantViolation { .. } => "invariant-violation",
        }
    }
}
