//! Winning line invariant: the status agrees with the lines on the board.

use super::super::rules::{find_winner, is_full};
use super::super::{GameState, GameStatus};
use super::Invariant;
use tracing::warn;

/// Invariant: status and board tell the same story.
///
/// - A won status names a line held entirely by the winner.
/// - An active game has no completed line and at least one open square.
/// - A drawn game has a full board and no completed line.
pub struct WinningLineInvariant;

impl Invariant for WinningLineInvariant {
    const DESCRIPTION: &'static str = "Game status matches the completed lines on the board";

    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let valid = match game.status() {
            GameStatus::Active => find_winner(board).is_none() && !is_full(board),
            GameStatus::Draw => find_winner(board).is_none() && is_full(board),
            GameStatus::XWon(line) | GameStatus::OWon(line) => {
                let winner = game.status().winner();
                line.iter().all(|pos| board.get(*pos).player() == winner)
            }
        };
        if !valid {
            warn!(status = %game.status(), "Status disagrees with board");
        }
        valid
    }
}
