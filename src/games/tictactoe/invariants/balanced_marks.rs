//! Balanced marks invariant: X never trails O and never leads by two.

use super::super::{GameState, Player};
use super::Invariant;
use tracing::warn;

/// Invariant: X's mark count minus O's is 0 or 1.
///
/// X always moves first and players alternate, so no other difference is
/// reachable.
pub struct BalancedMarksInvariant;

impl Invariant for BalancedMarksInvariant {
    const DESCRIPTION: &'static str = "X has the same number of marks as O, or one more";

    fn holds(game: &GameState) -> bool {
        let x_count = game.board().count(Player::X);
        let o_count = game.board().count(Player::O);
        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Mark balance violated");
        }
        valid
    }
}
