//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules never mutate the board they are given.

pub mod draw;
pub mod patterns;
pub mod win;

pub use draw::{check_draw, is_full};
pub use patterns::{RelevantPatterns, WIN_PATTERNS, WinPattern, relevant_pattern_indices};
pub use win::{WinResult, check_win, find_winner};
