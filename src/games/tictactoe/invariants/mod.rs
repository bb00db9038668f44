//! Game invariants, checked after every move in debug builds.
//!
//! Each invariant is a unit struct relating the board, the turn and the
//! status of a [`GameState`]. They are also tested on their own, including
//! against deliberately corrupted states.

use super::GameState;
use derive_more::Display;

pub mod balanced_marks;
pub mod turn_order;
pub mod winning_line;

pub use balanced_marks::BalancedMarksInvariant;
pub use turn_order::TurnOrderInvariant;
pub use winning_line::WinningLineInvariant;

/// A property every reachable [`GameState`] satisfies.
pub trait Invariant {
    /// What the invariant guarantees, used in violation reports.
    const DESCRIPTION: &'static str;

    /// Checks the invariant against `game`.
    fn holds(game: &GameState) -> bool;
}

/// A failed invariant, named by its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: &'static str,
}

type Check = (&'static str, fn(&GameState) -> bool);

/// All tic-tac-toe invariants, checked together.
pub struct TicTacToeInvariants;

impl TicTacToeInvariants {
    const CHECKS: [Check; 3] = [
        (BalancedMarksInvariant::DESCRIPTION, BalancedMarksInvariant::holds),
        (TurnOrderInvariant::DESCRIPTION, TurnOrderInvariant::holds),
        (WinningLineInvariant::DESCRIPTION, WinningLineInvariant::holds),
    ];

    /// Checks every invariant, reporting all violations rather than the first.
    pub fn check_all(game: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = Self::CHECKS
            .iter()
            .filter(|(_, holds)| !holds(game))
            .map(|&(description, _)| InvariantViolation { description })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
