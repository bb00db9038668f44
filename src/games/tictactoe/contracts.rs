//! Contract-based move validation for tic-tac-toe.
//!
//! The move gate is the precondition half: it runs before any board is
//! touched, so a rejected move never needs to be undone. The postcondition
//! half re-checks the game invariants after a move, in debug builds.

use super::error::MoveError;
use super::game::GameState;
use super::invariants::TicTacToeInvariants;
use super::{Board, GameStatus, Position};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: `pre(state, action)` must succeed before applying action
/// - Postcondition: `post(before, after)` must hold after applying action
pub trait Contract<S, A> {
    /// What a successful precondition check proves about the action.
    type Checked;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not been decided.
pub struct GameIsActive;

impl GameIsActive {
    /// Rejects with `GameOver` unless the status is `Active`.
    pub fn check(status: &GameStatus) -> Result<(), MoveError> {
        if status.is_active() {
            Ok(())
        } else {
            Err(MoveError::GameOver { status: *status })
        }
    }
}

/// Precondition: the coordinates name a square on the board.
pub struct InBounds;

impl InBounds {
    /// Converts raw coordinates into a `Position`.
    pub fn check(row: usize, col: usize) -> Result<Position, MoveError> {
        Position::new(row, col).ok_or(MoveError::InvalidPosition { row, col })
    }
}

/// Precondition: the target square is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with `CellOccupied` if `position` already holds a mark.
    pub fn check(board: &Board, position: Position) -> Result<(), MoveError> {
        if board.is_empty(position) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied { position })
        }
    }
}

/// The move gate: accepts or rejects a move request without side effects.
///
/// Checks run in a fixed order. A decided game reports `GameOver` for any
/// request, even an off-board one, so callers can tell "the game is over"
/// apart from "bad move in a live game".
pub struct MoveGate;

impl MoveGate {
    /// Validates a move request at `(row, col)`, returning the checked position.
    #[instrument(skip(board))]
    pub fn check(
        status: &GameStatus,
        board: &Board,
        row: usize,
        col: usize,
    ) -> Result<Position, MoveError> {
        let checked = GameIsActive::check(status)
            .and_then(|()| InBounds::check(row, col))
            .and_then(|position| SquareIsEmpty::check(board, position).map(|()| position));

        if let Err(e) = &checked {
            debug!(code = e.code(), "Move rejected");
        }
        checked
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions on a [`GameState`].
///
/// Preconditions: the move gate.
///
/// Postconditions:
/// - Mark counts stay balanced
/// - Turn order matches the mark counts
/// - The status agrees with the lines on the board
pub struct MoveContract;

impl Contract<GameState, (usize, usize)> for MoveContract {
    type Checked = Position;

    fn pre(game: &GameState, &(row, col): &(usize, usize)) -> Result<Position, MoveError> {
        MoveGate::check(game.status(), game.board(), row, col)
    }

    fn post(_before: &GameState, after: &GameState) -> Result<(), MoveError> {
        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let description = violations
                .iter()
                .map(|v| v.description)
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation {
                description: format!("Postcondition failed: {}", description),
            }
        })
    }
}
