//! Game session: owns the current state and serializes move handling.

use crate::games::tictactoe::{GameState, Messages, MoveError, Position};
use std::cell::{Cell, RefCell};
use tracing::{debug, info, instrument, warn};

/// A single local game driven by input events.
///
/// Input handlers receive `&GameSession`, so a handler that re-enters
/// itself while a move is being resolved is turned away with
/// [`MoveError::MoveInProgress`] instead of interleaving two moves.
#[derive(Debug)]
pub struct GameSession {
    state: RefCell<GameState>,
    busy: Cell<bool>,
    messages: Messages,
}

/// Marks a move as in flight; released on drop.
#[derive(Debug)]
pub struct MoveGuard<'a> {
    busy: &'a Cell<bool>,
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.busy.set(false);
    }
}

impl GameSession {
    /// Creates a session with a new game and default result messages.
    #[instrument]
    pub fn new() -> Self {
        Self::with_messages(Messages::default())
    }

    /// Creates a session with a new game and custom result messages.
    #[instrument]
    pub fn with_messages(messages: Messages) -> Self {
        info!("Creating new game session");
        Self {
            state: RefCell::new(GameState::new()),
            busy: Cell::new(false),
            messages,
        }
    }

    /// Claims the move slot, or rejects if a move is already in flight.
    pub fn begin_move(&self) -> Result<MoveGuard<'_>, MoveError> {
        if self.busy.replace(true) {
            warn!("Move submitted while another is resolving");
            return Err(MoveError::MoveInProgress);
        }
        Ok(MoveGuard { busy: &self.busy })
    }

    /// Submits a move for the current player at `(row, col)`.
    ///
    /// On success the session's state is replaced and the new state is
    /// returned. On rejection the state is left unchanged.
    #[instrument(skip(self))]
    pub fn submit(&self, row: usize, col: usize) -> Result<GameState, MoveError> {
        let _guard = self.begin_move()?;

        let current = *self.state.borrow();
        let next = current.play(row, col).map_err(|e| {
            debug!(code = e.code(), error = %e, "Move rejected");
            e
        })?;
        self.state.replace(next);

        info!(
            row,
            col,
            status = %next.status(),
            "Move completed successfully"
        );
        Ok(next)
    }

    /// Submits a move at an already-parsed position.
    pub fn submit_at(&self, position: Position) -> Result<GameState, MoveError> {
        self.submit(position.row(), position.col())
    }

    /// Returns a copy of the current state.
    pub fn snapshot(&self) -> GameState {
        *self.state.borrow()
    }

    /// Discards the current game and starts a new one.
    #[instrument(skip(self))]
    pub fn reset(&self) -> Result<(), MoveError> {
        let _guard = self.begin_move()?;
        self.state.replace(GameState::new());
        info!("Session reset");
        Ok(())
    }

    /// Result message for the current status; empty while the game is live.
    pub fn result_message(&self) -> String {
        self.snapshot().status().message_with(&self.messages).to_string()
    }

    /// Accessibility announcement for the current status.
    pub fn announcement(&self) -> String {
        self.snapshot().status().announcement(&self.messages)
    }

    /// Returns the configured result messages.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
