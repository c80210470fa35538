//! In-memory game configuration.

use super::board::{DEFAULT_SIZE, MAX_SIZE, WIN_LENGTH};
use super::error::SetupError;
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Who sits at the two seats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum GameType {
    /// Two humans sharing a terminal.
    #[default]
    HotSeat,
    /// One human against the local minimax AI.
    LocalAi,
}

/// Game options record.
///
/// Every field has a default, so a config file may name only the fields
/// it wants to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Setters)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameOptions {
    /// Board side length.
    size: usize,
    /// AI ply budget, at least 1.
    search_depth: usize,
    /// Maximum number of memoized positions the AI keeps.
    cache_capacity: usize,
    /// Seating arrangement.
    game_type: GameType,
}

#[instrument]
fn default_search_depth() -> usize {
    3
}

#[instrument]
fn default_cache_capacity() -> usize {
    100_000
}

impl GameOptions {
    /// Creates options for the documented 5×5 variant.
    #[instrument]
    pub fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            search_depth: default_search_depth(),
            cache_capacity: default_cache_capacity(),
            game_type: GameType::default(),
        }
    }

    /// Board side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// AI ply budget.
    pub fn search_depth(&self) -> usize {
        self.search_depth
    }

    /// AI cache entry budget.
    pub fn cache_capacity(&self) -> usize {
        self.cache_capacity
    }

    /// Seating arrangement.
    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    /// Checks that the options describe a playable game.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::InvalidOptions` if the board cannot hold a
    /// winning run, is too large for the run counters, or the search
    /// depth is zero.
    #[instrument]
    pub fn validate(&self) -> Result<(), SetupError> {
        if self.size < WIN_LENGTH as usize {
            return Err(SetupError::InvalidOptions(format!(
                "board size {} is smaller than the win length {}",
                self.size, WIN_LENGTH
            )));
        }
        if self.size > MAX_SIZE {
            return Err(SetupError::InvalidOptions(format!(
                "board size {} exceeds the maximum of {}",
                self.size, MAX_SIZE
            )));
        }
        if self.search_depth == 0 {
            return Err(SetupError::InvalidOptions(
                "search depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        Self::new()
    }
}
