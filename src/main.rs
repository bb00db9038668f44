//! Tic-tac-toe terminal driver.
//!
//! Reads moves from stdin (or `--moves`), feeds them through the game
//! session, and prints the board and the result.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::io::{BufRead, Write};
use tictactoe_core::{GameConfig, GameSession, GameState, MoveError, Position};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting tic-tac-toe");

    let session = GameSession::with_messages(config.messages().clone());
    let tokens = cli.move_tokens();
    let state = if tokens.is_empty() {
        run_interactive(&session)?
    } else {
        run_scripted(&session, &tokens)?
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }

    Ok(())
}

/// Outcome of feeding one line of input to the session.
enum Submitted {
    Accepted(GameState),
    Rejected(String),
}

/// Parses a move token and submits it to the session.
#[instrument(skip(session))]
fn submit_token(session: &GameSession, token: &str) -> Submitted {
    let attempt = match Position::parse(token) {
        Ok(Some(position)) => session.submit_at(position),
        Err((row, col)) => session.submit(row, col),
        Ok(None) => {
            debug!("Unrecognized input");
            return Submitted::Rejected(format!(
                "Unrecognized or ambiguous move {:?}. \
                 Try \"row col\", 0-8, or a name like \"center\".",
                token
            ));
        }
    };

    match attempt {
        Ok(state) => Submitted::Accepted(state),
        Err(e @ MoveError::GameOver { .. }) => Submitted::Rejected(format!("{}.", e)),
        Err(e) => Submitted::Rejected(format!("{}. Try again.", e)),
    }
}

/// Plays moves typed on stdin until the game ends or input runs out.
fn run_interactive(session: &GameSession) -> Result<GameState> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    println!("{}\n", session.snapshot().board().display());
    loop {
        let state = session.snapshot();
        if state.status().is_terminal() {
            println!("{}", session.announcement());
            return Ok(state);
        }

        print!("{}'s move: ", state.current_player());
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            info!("Input closed before the game finished");
            return Ok(state);
        }

        match submit_token(session, &line) {
            Submitted::Accepted(next) => println!("\n{}\n", next.board().display()),
            Submitted::Rejected(reason) => println!("{}", reason),
        }
    }
}

/// Plays a fixed list of moves, reporting each rejection.
fn run_scripted(session: &GameSession, tokens: &[&str]) -> Result<GameState> {
    for token in tokens {
        if let Submitted::Rejected(reason) = submit_token(session, token) {
            println!("{}: {}", token, reason);
        }
    }

    let state = session.snapshot();
    println!("{}\n", state.board().display());
    if state.status().is_terminal() {
        println!("{}", session.announcement());
    } else {
        println!("Game still in progress, {} to move.", state.current_player());
    }
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejection(session: &GameSession, token: &str) -> String {
        match submit_token(session, token) {
            Submitted::Rejected(reason) => reason,
            Submitted::Accepted(state) => panic!("{token:?} was accepted: {state:?}"),
        }
    }

    #[test]
    fn test_index_past_board_reports_invalid_position() {
        let session = GameSession::new();
        let reason = rejection(&session, "9");
        assert!(reason.contains("(3, 0)"), "got {reason}");
        assert!(reason.ends_with("Try again."));
        assert_eq!(session.snapshot(), GameState::new());
    }

    #[test]
    fn test_ambiguous_label_is_rejected() {
        let session = GameSession::new();
        assert!(rejection(&session, "left").starts_with("Unrecognized or ambiguous move"));
        assert_eq!(session.snapshot(), GameState::new());
    }

    #[test]
    fn test_unique_partial_label_is_played() {
        let session = GameSession::new();
        assert!(matches!(
            submit_token(&session, "bottom-c"),
            Submitted::Accepted(state) if !state.board().is_empty(Position::BOTTOM_CENTER)
        ));
    }
}
