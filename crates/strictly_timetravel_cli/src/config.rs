//! Session configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_timetravel::MoveOrder;
use tracing::{debug, info, instrument};

/// Presentation settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Order of the move list when the session starts.
    #[serde(default)]
    move_order: MoveOrder,

    /// Bracket the cells of a completed line.
    #[serde(default = "default_true")]
    highlight_winner: bool,

    /// Print the move list after every command.
    #[serde(default = "default_true")]
    show_move_list: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            move_order: MoveOrder::default(),
            highlight_winner: default_true(),
            show_move_list: default_true(),
        }
    }
}

impl SessionConfig {
    /// Creates a configuration with explicit settings.
    pub fn new(move_order: MoveOrder, highlight_winner: bool, show_move_list: bool) -> Self {
        Self {
            move_order,
            highlight_winner,
            show_move_list,
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(move_order = %config.move_order, "Config loaded successfully");
        Ok(config)
    }

    /// Loads configuration from `path`, or defaults when the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
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
    /// Creates a new configuration error.
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
