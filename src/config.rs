//! Runtime configuration for the terminal driver.

use crate::games::tictactoe::Messages;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Game configuration, loaded from TOML.
///
/// Every field has a default, so an empty file is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Result wording shown when the game ends.
    #[serde(default)]
    messages: Messages,
}

#[instrument]
fn default_log_filter() -> String {
    "warn".to_string()
}

impl GameConfig {
    /// Creates a configuration with default values.
    #[instrument]
    pub fn new() -> Self {
        Self {
            log_filter: default_log_filter(),
            messages: Messages::default(),
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(log_filter = %config.log_filter, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = GameConfig::from_toml("").expect("empty config is valid");
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.log_filter(), "warn");
        assert_eq!(config.messages().draw(), "It's a draw!");
    }

    #[test]
    fn test_partial_messages_keep_other_defaults() {
        let config = GameConfig::from_toml(
            r#"
            log_filter = "debug"

            [messages]
            draw = "Cat's game."
            "#,
        )
        .expect("valid config");
        assert_eq!(config.log_filter(), "debug");
        assert_eq!(config.messages().draw(), "Cat's game.");
        assert_eq!(config.messages().x_wins(), "Player X wins!");
    }

    #[test]
    fn test_malformed_toml_is_error() {
        let err = GameConfig::from_toml("log_filter = ").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
