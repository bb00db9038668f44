//! Turn order invariant: the player to move follows from the mark counts.

use super::super::{GameState, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: the recorded player to move matches the board.
///
/// While the game is active, X moves when the counts are equal and O
/// otherwise. Once decided, the turn stays with whoever moved last.
pub struct TurnOrderInvariant;

impl Invariant for TurnOrderInvariant {
    const DESCRIPTION: &'static str = "Player to move is consistent with the marks on the board";

    fn holds(game: &GameState) -> bool {
        let x_count = game.board().count(Player::X);
        let o_count = game.board().count(Player::O);

        let expected = match (game.status().is_active(), x_count > o_count) {
            (true, false) => Player::X,
            (true, true) => Player::O,
            (false, true) => Player::X,
            (false, false) => Player::O,
        };

        let valid = game.current_player() == expected;
        if !valid {
            warn!(
                recorded = %game.current_player(),
                %expected,
                "Turn order violated"
            );
        }
        valid
    }
}
