//! Tic-tac-toe game-over detection and move validation.

mod contracts;
mod error;
mod game;
mod invariants;
mod position;
pub mod rules;
mod status;
mod types;

pub use contracts::{Contract, GameIsActive, InBounds, MoveContract, MoveGate, SquareIsEmpty};
pub use error::MoveError;
pub use game::GameState;
pub use invariants::{
    BalancedMarksInvariant, Invariant, InvariantViolation, TicTacToeInvariants,
    TurnOrderInvariant, WinningLineInvariant,
};
pub use position::{BOARD_SIZE, Position};
pub use rules::{
    RelevantPatterns, WIN_PATTERNS, WinPattern, WinResult, check_draw, check_win, find_winner,
    relevant_pattern_indices,
};
pub use status::{GameStatus, Messages};
pub use types::{Board, Player, Square};
