//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use super::patterns::{WIN_PATTERNS, WinPattern, relevant_pattern_indices};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// A completed line: who owns it and which three squares it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    /// Player holding all three squares.
    pub winner: Player,
    /// The three squares, in table order.
    pub line: WinPattern,
}

/// Returns the owner of `pattern` if all three squares hold the same mark.
fn line_owner(board: &Board, pattern: &WinPattern) -> Option<Player> {
    let [a, b, c] = *pattern;
    let sq = board.get(a);
    if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
        sq.player()
    } else {
        None
    }
}

/// Checks whether the mark just placed at `last_move` completed a line.
///
/// Only the lines through `last_move` are examined, lowest table index
/// first. The square at `last_move` must be occupied: an empty square is a
/// caller bug and fails fast in debug builds; release builds log it and
/// report no win.
#[instrument(skip(board), fields(last_move = %last_move))]
pub fn check_win(board: &Board, last_move: Position) -> Option<WinResult> {
    let Some(mover) = board.get(last_move).player() else {
        if cfg!(debug_assertions) {
            panic!("check_win called with empty last move {last_move}");
        }
        warn!("Last move points at an empty square");
        return None;
    };

    let relevant = relevant_pattern_indices(last_move);
    debug!(indices = ?relevant.as_slice(), "Checking lines through last move");

    for (index, pattern) in relevant.patterns() {
        if line_owner(board, pattern) == Some(mover) {
            debug!(index, winner = %mover, "Line completed");
            return Some(WinResult {
                winner: mover,
                line: *pattern,
            });
        }
    }

    None
}

/// Scans all eight lines and returns the first completed one.
///
/// Used where no last move is known (invariant checks, fixtures) and as the
/// reference that [`check_win`] is tested against.
#[instrument(skip(board))]
pub fn find_winner(board: &Board) -> Option<WinResult> {
    WIN_PATTERNS.iter().find_map(|pattern| {
        line_owner(board, pattern).map(|winner| WinResult {
            winner,
            line: *pattern,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);
    const E: Square = Square::Empty;

    #[test]
    fn test_top_row_win() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        let result = check_win(&board, Position::TOP_RIGHT).expect("X completed the top row");
        assert_eq!(result.winner, Player::X);
        assert_eq!(
            result.line,
            [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT]
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let board = Board::from_rows([[X, X, O], [E, O, E], [O, E, X]]);
        let result =
            check_win(&board, Position::BOTTOM_LEFT).expect("O completed the anti-diagonal");
        assert_eq!(result.winner, Player::O);
        assert_eq!(result.line, WIN_PATTERNS[7]);
    }

    #[test]
    fn test_no_win_on_incomplete_line() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(check_win(&board, Position::TOP_CENTER), None);
    }

    #[test]
    fn test_line_not_through_last_move_is_ignored() {
        // X already owns the top row, but the last move was O's in the bottom corner.
        let board = Board::from_rows([[X, X, X], [E, E, E], [E, O, O]]);
        assert_eq!(check_win(&board, Position::BOTTOM_RIGHT), None);
        assert_eq!(find_winner(&board).map(|r| r.winner), Some(Player::X));
    }

    #[test]
    fn test_center_reports_lowest_index_first() {
        // Center move completes both the middle row (1) and the main diagonal (6).
        let board = Board::from_rows([[X, O, O], [X, X, X], [O, O, X]]);
        let result = check_win(&board, Position::CENTER).expect("X wins");
        assert_eq!(result.line, WIN_PATTERNS[1]);
    }

    #[test]
    fn test_find_winner_empty_board() {
        assert_eq!(find_winner(&Board::new()), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "empty last move")]
    fn test_empty_last_move_fails_fast() {
        let board = Board::from_rows([[X, X, X], [E, E, E], [E, E, E]]);
        let _ = check_win(&board, Position::CENTER);
    }
}
