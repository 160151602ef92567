//! Settings file and flag merging.

use crate::cli::Cli;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};
use ttt_engine::Symbol;

/// Player preferences read from a TOML file.
///
/// Every key is optional. Anything left unset is asked for at the prompt
/// or falls back to a built-in default.
///
/// ```toml
/// name = "Ada"
/// marker = "O"
/// seed = 42
/// clear_screen = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Human display name.
    name: Option<String>,

    /// Marker the human plays.
    marker: Option<Symbol>,

    /// Seed for the computer's random choices.
    seed: Option<u64>,

    #[getter(skip)]
    clear_screen: Option<bool>,
}

impl Settings {
    /// Loads settings from `path`. A missing file yields the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No settings file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let settings = Self::from_toml(&content)?;
        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Applies command-line flags on top of the file values.
    #[instrument(skip_all)]
    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(name) = &cli.name {
            self.name = Some(name.clone());
        }
        if cli.marker.is_some() {
            self.marker = cli.marker;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if cli.no_clear {
            self.clear_screen = Some(false);
        }
        debug!(settings = ?self, "Flags applied");
        self
    }

    /// Whether to clear the terminal between moves (default on).
    pub fn clear_screen(&self) -> bool {
        self.clear_screen.unwrap_or(true)
    }
}

/// Settings file error.
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
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
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
    use clap::Parser;

    #[test]
    fn test_parse_full_file() {
        let settings = Settings::from_toml(
            r#"
name = "Ada"
marker = "o"
seed = 7
clear_screen = false
"#,
        )
        .unwrap();
        assert_eq!(settings.name().as_deref(), Some("Ada"));
        assert_eq!(*settings.marker(), Some(Symbol::O));
        assert_eq!(*settings.seed(), Some(7));
        assert!(!settings.clear_screen());
    }

    #[test]
    fn test_empty_file_is_default() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert!(settings.clear_screen());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = Settings::from_toml("board_size = 4").unwrap_err();
        assert!(err.message.contains("Failed to parse settings"));
    }

    #[test]
    fn test_flags_override_file() {
        let file = Settings::from_toml("name = \"Ada\"\nmarker = \"X\"\nseed = 1").unwrap();
        let cli = Cli::parse_from(["ttt", "--marker", "O", "--no-clear"]);
        let settings = file.with_overrides(&cli);

        assert_eq!(settings.name().as_deref(), Some("Ada"));
        assert_eq!(*settings.marker(), Some(Symbol::O));
        assert_eq!(*settings.seed(), Some(1));
        assert!(!settings.clear_screen());
    }
}
