//! Board coordinates for tic-tac-toe moves.

use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of rows (and columns) on the board.
pub const BOARD_SIZE: usize = 3;

/// A zero-based `(row, col)` coordinate on the 3x3 board.
///
/// A `Position` is always in bounds: the only ways to build one are the
/// checked constructors and the named constants, so code holding a
/// `Position` never needs to re-validate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Top-left (0, 0)
    pub const TOP_LEFT: Position = Position { row: 0, col: 0 };
    /// Top-center (0, 1)
    pub const TOP_CENTER: Position = Position { row: 0, col: 1 };
    /// Top-right (0, 2)
    pub const TOP_RIGHT: Position = Position { row: 0, col: 2 };
    /// Middle-left (1, 0)
    pub const MIDDLE_LEFT: Position = Position { row: 1, col: 0 };
    /// Center (1, 1)
    pub const CENTER: Position = Position { row: 1, col: 1 };
    /// Middle-right (1, 2)
    pub const MIDDLE_RIGHT: Position = Position { row: 1, col: 2 };
    /// Bottom-left (2, 0)
    pub const BOTTOM_LEFT: Position = Position { row: 2, col: 0 };
    /// Bottom-center (2, 1)
    pub const BOTTOM_CENTER: Position = Position { row: 2, col: 1 };
    /// Bottom-right (2, 2)
    pub const BOTTOM_RIGHT: Position = Position { row: 2, col: 2 };

    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TOP_LEFT,
        Position::TOP_CENTER,
        Position::TOP_RIGHT,
        Position::MIDDLE_LEFT,
        Position::CENTER,
        Position::MIDDLE_RIGHT,
        Position::BOTTOM_LEFT,
        Position::BOTTOM_CENTER,
        Position::BOTTOM_RIGHT,
    ];

    /// Creates a position, or `None` if either coordinate is outside `0..3`.
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Creates a position from a row-major board index (0-8).
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SIZE * BOARD_SIZE {
            Some(Self {
                row: index / BOARD_SIZE,
                col: index % BOARD_SIZE,
            })
        } else {
            None
        }
    }

    /// Row coordinate (0-2).
    pub const fn row(self) -> usize {
        self.row
    }

    /// Column coordinate (0-2).
    pub const fn col(self) -> usize {
        self.col
    }

    /// Converts position to its row-major board index (0-8).
    pub const fn to_index(self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    /// True for the center square.
    pub const fn is_center(self) -> bool {
        self.row == 1 && self.col == 1
    }

    /// True for the four corner squares.
    pub const fn is_corner(self) -> bool {
        self.row != 1 && self.col != 1
    }

    /// Get label for this position (for display and announcements).
    pub fn label(&self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.to_index()]
    }

    /// Parses textual input into a position.
    ///
    /// Accepts `"row col"` / `"row,col"` pairs, a single board index (0-8),
    /// or a label (case-insensitive; a partial label must match exactly one
    /// square).
    ///
    /// Returns `Err((row, col))` when the input names coordinates that are
    /// out of bounds, so the caller can report them. An index past 8 maps to
    /// the row-major coordinates it would have. `Ok(None)` means the input is
    /// not recognizable or is ambiguous.
    #[instrument]
    pub fn parse(s: &str) -> Result<Option<Position>, (usize, usize)> {
        let s = s.trim();
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                if let (Ok(row), Ok(col)) = (row.parse::<usize>(), col.parse::<usize>()) {
                    return Position::new(row, col).map(Some).ok_or((row, col));
                }
            }
            [index] => {
                if let Ok(index) = index.parse::<usize>() {
                    return Position::from_index(index)
                        .map(Some)
                        .ok_or((index / BOARD_SIZE, index % BOARD_SIZE));
                }
            }
            _ => {}
        }

        Ok(Self::from_label_or_number(s))
    }

    /// Parse from label or number (0-8).
    ///
    /// An exact label wins; otherwise a partial label must match one square
    /// only, so `"left"` is rejected while `"bottom-c"` is accepted.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        if let Ok(num) = s.trim().parse::<usize>() {
            return Self::from_index(num);
        }

        let s_lower = s.trim().to_lowercase();
        if s_lower.is_empty() {
            return None;
        }

        let exact = Self::ALL
            .into_iter()
            .find(|pos| pos.label().eq_ignore_ascii_case(&s_lower));
        if exact.is_some() {
            return exact;
        }

        let mut partial = Self::ALL
            .into_iter()
            .filter(|pos| pos.label().to_lowercase().contains(&s_lower));
        let first = partial.next();
        if partial.next().is_some() {
            debug!(input = %s_lower, "Ambiguous label");
            return None;
        }
        first
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect()
    }
}

impl TryFrom<(usize, usize)> for Position {
    type Error = String;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Position::new(row, col).ok_or_else(|| format!("position ({row}, {col}) is off the board"))
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
