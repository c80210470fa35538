//! Command-line interface for tic_tac_five.

use crate::config::{AppConfig, ConfigError};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tic_tac_five::GameType;
use tracing::{debug, instrument};

/// Five in a row on an N×N grid, hot seat or against the minimax AI
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tic_tac_five")]
#[command(about = "Five in a row in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length (at least 5)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// AI search depth in plies
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Who plays
    #[arg(short, long, value_enum)]
    pub mode: Option<Mode>,

    /// Let the AI take X and move first
    #[arg(long)]
    pub ai_first: bool,

    /// Name shown for the first human player
    #[arg(short, long)]
    pub name: Option<String>,

    /// Keep previous output instead of clearing the screen each turn
    #[arg(long)]
    pub no_clear: bool,
}

/// Seating arrangement as spelled on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Two humans sharing the terminal
    HotSeat,
    /// One human against the AI
    Ai,
}

impl From<Mode> for GameType {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::HotSeat => GameType::HotSeat,
            Mode::Ai => GameType::LocalAi,
        }
    }
}

impl Cli {
    /// Loads the config file, if any, and applies flag overrides on top.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        let mut game = *config.game();
        if let Some(size) = self.size {
            game = game.with_size(size);
        }
        if let Some(depth) = self.depth {
            game = game.with_search_depth(depth);
        }
        if let Some(mode) = self.mode {
            game = game.with_game_type(mode.into());
        }
        config.set_game(game);

        if let Some(name) = &self.name {
            config.set_player_name(name.clone());
        }

        debug!(?config, "Configuration resolved");
        Ok(config)
    }
}
