//! Tests for session-level move handling and configuration.

use std::io::Write;
use tempfile::NamedTempFile;
use tictactoe_core::{GameConfig, GameSession, GameStatus, MoveError};

#[test]
fn test_session_plays_to_draw() {
    let session = GameSession::new();
    for (row, col) in [
        (0, 0),
        (1, 1),
        (2, 2),
        (0, 2),
        (2, 0),
        (1, 0),
        (1, 2),
        (2, 1),
        (0, 1),
    ] {
        session.submit(row, col).expect("valid move");
    }
    assert_eq!(session.snapshot().status(), &GameStatus::Draw);
    assert_eq!(session.result_message(), "It's a draw!");
    assert_eq!(
        session.submit(0, 0).map_err(|e| e.code()),
        Err("game-over")
    );
}

#[test]
fn test_session_rejects_while_move_in_flight() {
    let session = GameSession::new();
    let guard = session.begin_move().expect("slot free");
    assert_eq!(session.submit(1, 1), Err(MoveError::MoveInProgress));
    assert_eq!(session.reset(), Err(MoveError::MoveInProgress));
    drop(guard);
    assert!(session.submit(1, 1).is_ok());
}

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        r#"
log_filter = "info"

[messages]
x_wins = "Crosses take it!"
o_wins = "Noughts take it!"
draw = "Nobody wins."
"#
    )
    .expect("write config");

    let config = GameConfig::from_file(file.path()).expect("valid config");
    assert_eq!(config.log_filter(), "info");

    let session = GameSession::with_messages(config.messages().clone());
    for (row, col) in [(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)] {
        session.submit(row, col).expect("valid move");
    }
    assert_eq!(session.result_message(), "Crosses take it!");
}

#[test]
fn test_missing_config_file_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
