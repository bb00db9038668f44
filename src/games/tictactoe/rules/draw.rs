//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Reports a draw: true iff every square is occupied.
///
/// Does not look for a winner. A full board that also holds a completed
/// line is a win, so callers must run win detection first and only ask
/// about a draw when it found nothing.
#[instrument(skip(board))]
pub fn check_draw(board: &Board) -> bool {
    is_full(board)
}
