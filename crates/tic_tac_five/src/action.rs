//! First-class action types.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::Player;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player claiming the cell at column `x`, row `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Column, `0..size`.
    pub x: usize,
    /// Row, `0..size`.
    pub y: usize,
    /// The player making the move.
    pub player: Player,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(x: usize, y: usize, player: Player) -> Self {
        Self { x, y, player }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the `(x, y)` coordinates of this move.
    pub fn coords(&self) -> (usize, usize) {
        (self.x, self.y)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> ({}, {})", self.player, self.x, self.y)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The game has not been started.
    #[display("Game has not started")]
    NotStarted,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongTurn(Player),

    /// The coordinates are outside the board.
    #[display("({x}, {y}) is outside the board")]
    OutOfBounds {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },

    /// The cell is already claimed.
    #[display("Cell ({x}, {y}) is already occupied")]
    CellOccupied {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl MoveError {
    /// True for the placement errors: out of bounds or occupied.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            MoveError::OutOfBounds { .. } | MoveError::CellOccupied { .. }
        )
    }
}

impl std::error::Error for MoveError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        assert_eq!(Move::new(3, 1, Player::O).to_string(), "O -> (3, 1)");
    }

    #[test]
    fn test_invalid_move_grouping() {
        assert!(MoveError::OutOfBounds { x: 9, y: 0 }.is_invalid_move());
        assert!(MoveError::CellOccupied { x: 0, y: 0 }.is_invalid_move());
        assert!(!MoveError::WrongTurn(Player::X).is_invalid_move());
        assert!(!MoveError::GameOver.is_invalid_move());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::CellOccupied { x: 2, y: 4 }.to_string(),
            "Cell (2, 4) is already occupied"
        );
        assert_eq!(MoveError::WrongTurn(Player::O).to_string(), "It's not O's turn");
    }
}
