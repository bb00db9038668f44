//! Tic-tac-toe game-over detection.
//!
//! Pure rules for deciding when a 3x3 game is won or drawn, a status state
//! machine whose terminal states absorb, and a move gate that rejects play
//! once the game is decided.
//!
//! # Architecture
//!
//! - **Rules**: the eight winning lines, win detection restricted to the
//!   lines through the last move, and full-board detection
//! - **Status**: `Active` → `XWon` / `OWon` / `Draw`, win checked before draw
//! - **Gate**: rejects moves with `GameOver`, `InvalidPosition` or `CellOccupied`
//! - **Session**: owns the current state and turns away re-entrant moves
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, GameStatus, Player};
//!
//! let state = GameState::new()
//!     .play(0, 0)?
//!     .play(1, 0)?
//!     .play(0, 1)?
//!     .play(1, 1)?
//!     .play(0, 2)?;
//!
//! assert_eq!(state.status().winner(), Some(Player::X));
//! assert!(matches!(state.status(), GameStatus::XWon(_)));
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Session management
pub use session::{GameSession, MoveGuard};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, BalancedMarksInvariant, Board, Contract, GameIsActive, GameState, GameStatus,
    InBounds, Invariant, InvariantViolation, Messages, MoveContract, MoveError, MoveGate, Player,
    Position, RelevantPatterns, Square, SquareIsEmpty, TicTacToeInvariants, TurnOrderInvariant,
    WIN_PATTERNS, WinPattern, WinResult, WinningLineInvariant, check_draw, check_win, find_winner,
    relevant_pattern_indices,
};
