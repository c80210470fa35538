//! Player trait and implementations.

mod human;
mod minimax;

pub use human::{parse_coordinates, HumanPlayer, ParseError, SharedInput, PROMPT};
pub use minimax::MinimaxPlayer;

use anyhow::Result;
use tic_tac_five::{PlayerKind, TicTacToe};

/// Something that can pick moves for one seat.
pub trait Player {
    /// Gets the next move as `(x, y)` for the game's current position.
    fn get_move(&mut self, game: &TicTacToe) -> Result<(usize, usize)>;

    /// Returns the player's display name.
    fn name(&self) -> &str;

    /// Controller type recorded in the game's seat.
    fn kind(&self) -> PlayerKind;

    /// Asks whether this player wants another game.
    fn accepts_rematch(&mut self) -> Result<bool>;
}
