//! Optional TOML configuration for the terminal front end.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tic_tac_five::GameOptions;
use tracing::{debug, info, instrument};

/// Settings read from a config file before flag overrides.
///
/// ```toml
/// player_name = "alice"
///
/// [game]
/// size = 7
/// search_depth = 2
/// game_type = "local-ai"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Options passed to the game.
    #[serde(default)]
    game: GameOptions,

    /// Name shown for the first human seat.
    #[serde(default = "default_player_name")]
    player_name: String,
}

#[instrument]
fn default_player_name() -> String {
    "Player 1".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            game: GameOptions::default(),
            player_name: default_player_name(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or is not valid TOML
    /// for this layout.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(player_name = %config.player_name, "Config loaded successfully");
        Ok(config)
    }

    /// Replaces the game options.
    pub fn set_game(&mut self, game: GameOptions) {
        self.game = game;
    }

    /// Replaces the first human's name.
    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
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
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
