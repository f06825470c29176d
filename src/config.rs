//! Engine configuration loaded from TOML.

use crate::games::tictactoe::Difficulty;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for the controller and the CLI.
///
/// Every field has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Delay before the computer's move lands, in milliseconds.
    computer_delay_ms: u64,

    /// Difficulty used when a game is started without one.
    default_difficulty: Difficulty,

    /// Fixed RNG seed for reproducible games.
    seed: Option<u64>,

    /// Fallback tracing filter when `RUST_LOG` is unset.
    log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            computer_delay_ms: 500,
            default_difficulty: Difficulty::default(),
            seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Computer "thinking" delay.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }

    /// Returns a copy with a different delay.
    pub fn with_computer_delay(mut self, delay: Duration) -> Self {
        self.computer_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Returns a copy with a fixed seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            delay_ms = config.computer_delay_ms,
            difficulty = %config.default_difficulty,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if given, otherwise returns defaults.
    #[instrument(skip(path))]
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
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
    /// Creates a new configuration error at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.computer_delay(), Duration::from_millis(500));
        assert_eq!(*config.default_difficulty(), Difficulty::Hard);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_difficulty = \"medium\"\nseed = 42").unwrap();

        let config = EngineConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.default_difficulty(), Difficulty::Medium);
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.computer_delay_ms(), 500);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_bad_file_reports_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "computer_delay_ms = \"soon\"").unwrap();

        let err = EngineConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.contains("Failed to read"));
        assert!(EngineConfig::load_or_default(None).is_ok());
    }
}
