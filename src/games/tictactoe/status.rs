//! Game status state machine.
//!
//! `Active` is the only initial state. `XWon`, `OWon` and `Draw` are
//! absorbing: once entered, [`GameStatus::advance`] returns them unchanged.
//! The winning line travels inside the won variants, so a status can never
//! claim a winner without a line or carry a line after a draw.

use super::rules::{WinPattern, WinResult, check_draw, check_win};
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    #[default]
    Active,
    /// X completed the given line.
    XWon(WinPattern),
    /// O completed the given line.
    OWon(WinPattern),
    /// Board filled with no completed line.
    Draw,
}

impl GameStatus {
    /// Won status for a detector result.
    pub fn from_win(result: WinResult) -> Self {
        match result.winner {
            Player::X => GameStatus::XWon(result.line),
            Player::O => GameStatus::OWon(result.line),
        }
    }

    /// Status after a mark was placed at `last_move` on `board`.
    ///
    /// Win is checked before draw, so a move that completes a line and fills
    /// the board is a win. Terminal statuses are returned unchanged. The turn
    /// is never touched here.
    #[instrument(skip(self, board), fields(status = ?self, last_move = %last_move))]
    pub fn advance(self, board: &Board, last_move: Position) -> Self {
        if self.is_terminal() {
            debug!("Status already terminal, ignoring move");
            return self;
        }

        if let Some(result) = check_win(board, last_move) {
            let next = Self::from_win(result);
            info!(winner = %result.winner, "Game won");
            return next;
        }

        if check_draw(board) {
            info!("Game drawn");
            return GameStatus::Draw;
        }

        GameStatus::Active
    }

    /// True while moves are still accepted.
    pub fn is_active(&self) -> bool {
        matches!(self, GameStatus::Active)
    }

    /// True for the three absorbing statuses.
    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::XWon(_) => Some(Player::X),
            GameStatus::OWon(_) => Some(Player::O),
            GameStatus::Active | GameStatus::Draw => None,
        }
    }

    /// The completed line, present only for won statuses.
    pub fn winning_line(&self) -> Option<&WinPattern> {
        match self {
            GameStatus::XWon(line) | GameStatus::OWon(line) => Some(line),
            GameStatus::Active | GameStatus::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameStatus::Draw)
    }

    /// Result text with the default wording; empty while active.
    pub fn message(&self) -> &'static str {
        match self {
            GameStatus::Active => "",
            GameStatus::XWon(_) => DEFAULT_X_WINS,
            GameStatus::OWon(_) => DEFAULT_O_WINS,
            GameStatus::Draw => DEFAULT_DRAW,
        }
    }

    /// Result text using configured wording; empty while active.
    pub fn message_with<'a>(&self, messages: &'a Messages) -> &'a str {
        match self {
            GameStatus::Active => "",
            GameStatus::XWon(_) => &messages.x_wins,
            GameStatus::OWon(_) => &messages.o_wins,
            GameStatus::Draw => &messages.draw,
        }
    }

    /// Screen-reader text: the result message, plus the winning squares.
    pub fn announcement(&self, messages: &Messages) -> String {
        let message = self.message_with(messages);
        match self.winning_line() {
            Some(line) => {
                let squares: Vec<&str> = line.iter().map(|p| p.label()).collect();
                format!("{} Winning line: {}.", message, squares.join(", "))
            }
            None => message.to_string(),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Active => write!(f, "Active"),
            GameStatus::XWon(_) => write!(f, "X won"),
            GameStatus::OWon(_) => write!(f, "O won"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

const DEFAULT_X_WINS: &str = "Player X wins!";
const DEFAULT_O_WINS: &str = "Player O wins!";
const DEFAULT_DRAW: &str = "It's a draw!";

/// Human-readable result messages, one per terminal status.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown when X wins.
    x_wins: String,
    /// Shown when O wins.
    o_wins: String,
    /// Shown on a draw.
    draw: String,
}

impl Messages {
    /// Creates a message set with custom wording.
    pub fn new(
        x_wins: impl Into<String>,
        o_wins: impl Into<String>,
        draw: impl Into<String>,
    ) -> Self {
        Self {
            x_wins: x_wins.into(),
            o_wins: o_wins.into(),
            draw: draw.into(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(DEFAULT_X_WINS, DEFAULT_O_WINS, DEFAULT_DRAW)
    }
}
