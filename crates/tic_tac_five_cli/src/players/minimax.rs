//! AI player backed by the minimax search.

use super::Player;
use anyhow::Result;
use tic_tac_five::{GameOptions, Minimax, Player as Mark, PlayerKind, TicTacToe};
use tracing::{debug, instrument};

/// Plays one mark using [`Minimax`].
pub struct MinimaxPlayer {
    name: String,
    ai: Minimax,
}

impl MinimaxPlayer {
    /// Creates an AI for `symbol` using the depth and cache budget from `options`.
    pub fn new(name: impl Into<String>, symbol: Mark, options: &GameOptions) -> Self {
        Self {
            name: name.into(),
            ai: Minimax::from_options(symbol, options),
        }
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip(self, game), fields(name = %self.name))]
    fn get_move(&mut self, game: &TicTacToe) -> Result<(usize, usize)> {
        let coords = self.ai.choose_for(game)?;
        let stats = self.ai.last_stats();
        debug!(
            x = coords.0,
            y = coords.1,
            nodes = stats.nodes,
            cache_hits = stats.cache_hits,
            "AI chose move"
        );
        Ok(coords)
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Ai
    }

    fn accepts_rematch(&mut self) -> Result<bool> {
        Ok(true)
    }
}
