//! The eight winning lines and the subset a single move can affect.

use super::super::Position;
use tracing::instrument;

/// Three positions that win when held by one player.
pub type WinPattern = [Position; 3];

/// Index of the main diagonal (top-left to bottom-right).
pub const MAIN_DIAGONAL: usize = 6;

/// Index of the anti-diagonal (top-right to bottom-left).
pub const ANTI_DIAGONAL: usize = 7;

/// All winning lines: rows 0-2, columns 3-5, main diagonal 6, anti-diagonal 7.
///
/// The ordering is relied on by [`relevant_pattern_indices`].
pub const WIN_PATTERNS: [WinPattern; 8] = [
    // Rows
    [Position::TOP_LEFT, Position::TOP_CENTER, Position::TOP_RIGHT],
    [Position::MIDDLE_LEFT, Position::CENTER, Position::MIDDLE_RIGHT],
    [Position::BOTTOM_LEFT, Position::BOTTOM_CENTER, Position::BOTTOM_RIGHT],
    // Columns
    [Position::TOP_LEFT, Position::MIDDLE_LEFT, Position::BOTTOM_LEFT],
    [Position::TOP_CENTER, Position::CENTER, Position::BOTTOM_CENTER],
    [Position::TOP_RIGHT, Position::MIDDLE_RIGHT, Position::BOTTOM_RIGHT],
    // Diagonals
    [Position::TOP_LEFT, Position::CENTER, Position::BOTTOM_RIGHT],
    [Position::TOP_RIGHT, Position::CENTER, Position::BOTTOM_LEFT],
];

/// Indices into [`WIN_PATTERNS`] for the lines passing through `pos`.
///
/// Always the row and the column; the main diagonal when `row == col`; the
/// anti-diagonal when `row + col == 2`. Edges get 2 lines, corners 3, the
/// center 4. Indices are ascending.
#[instrument]
pub fn relevant_pattern_indices(pos: Position) -> RelevantPatterns {
    let mut relevant = RelevantPatterns::default();
    relevant.push(pos.row());
    relevant.push(3 + pos.col());
    if pos.row() == pos.col() {
        relevant.push(MAIN_DIAGONAL);
    }
    if pos.row() + pos.col() == 2 {
        relevant.push(ANTI_DIAGONAL);
    }
    relevant
}

/// Up to four pattern indices, stored inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RelevantPatterns {
    indices: [usize; 4],
    len: usize,
}

impl RelevantPatterns {
    fn push(&mut self, index: usize) {
        self.indices[self.len] = index;
        self.len += 1;
    }

    /// The selected indices in ascending order.
    pub fn as_slice(&self) -> &[usize] {
        &self.indices[..self.len]
    }

    /// Number of selected patterns (2, 3 or 4).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true for a real position; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterates the selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.as_slice().iter().copied()
    }

    /// Iterates `(index, pattern)` pairs for the selected lines.
    pub fn patterns(&self) -> impl Iterator<Item = (usize, &'static WinPattern)> + '_ {
        self.iter().map(|i| (i, &WIN_PATTERNS[i]))
    }
}
