//! Command-line interface for the tic-tac-toe terminal driver.

use clap::Parser;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe with game-over detection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Play a scripted game instead of reading stdin, e.g. "0,0 1,1 0,1"
    #[arg(short, long)]
    pub moves: Option<String>,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Splits the scripted move list into individual move tokens.
    pub fn move_tokens(&self) -> Vec<&str> {
        self.moves
            .as_deref()
            .map(|m| {
                m.split(|c: char| c.is_whitespace() || c == ';')
                    .filter(|t| !t.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_tokens() {
        let cli = Cli::parse_from(["tictactoe", "--moves", "0,0 1,1;center  8"]);
        assert_eq!(cli.move_tokens(), vec!["0,0", "1,1", "center", "8"]);
        assert!(!cli.json);
    }

    #[test]
    fn test_no_moves_is_interactive() {
        let cli = Cli::parse_from(["tictactoe", "--json"]);
        assert!(cli.move_tokens().is_empty());
        assert!(cli.json);
    }
}
