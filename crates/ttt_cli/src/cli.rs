//! Command-line interface for the console game.

use clap::Parser;
use std::path::PathBuf;
use ttt_engine::Symbol;

/// Tic-tac-toe against the computer, first to 5 rounds wins the match
#[derive(Parser, Debug, Clone)]
#[command(name = "ttt")]
#[command(about = "Console tic-tac-toe against a rule-based computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Your display name (prompted if omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Your marker, X or O (prompted if omitted)
    #[arg(short, long, value_parser = parse_marker)]
    pub marker: Option<Symbol>,

    /// Seed for the computer's random choices, for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to the settings file (skipped if it does not exist)
    #[arg(short, long, default_value = "ttt.toml")]
    pub config: PathBuf,

    /// Keep the scrollback instead of clearing the screen between moves
    #[arg(long)]
    pub no_clear: bool,
}

fn parse_marker(s: &str) -> Result<Symbol, String> {
    Symbol::parse(s).ok_or_else(|| format!("expected X or O, got '{s}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ttt"]);
        assert_eq!(cli.name, None);
        assert_eq!(cli.marker, None);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.config, PathBuf::from("ttt.toml"));
        assert!(!cli.no_clear);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::parse_from([
            "ttt", "--name", "Ada", "--marker", "o", "--seed", "9", "--config", "x.toml",
            "--no-clear",
        ]);
        assert_eq!(cli.name.as_deref(), Some("Ada"));
        assert_eq!(cli.marker, Some(Symbol::O));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.config, PathBuf::from("x.toml"));
        assert!(cli.no_clear);
    }

    #[test]
    fn test_bad_marker_rejected() {
        assert!(Cli::try_parse_from(["ttt", "--marker", "z"]).is_err());
    }
}
