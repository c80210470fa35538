//! Core domain types for five-in-a-row.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Seat index of this player (X is 0, O is 1).
    pub fn index(self) -> usize {
        match self {
            Player::X => 0,
            Player::O => 1,
        }
    }

    /// Character used when rendering or serializing a board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used when rendering or serializing a board.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '-',
            Square::Occupied(player) => player.symbol(),
        }
    }

    /// Returns the owner, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Current status of the game.
///
/// `NotStarted` is initial; `XWon`, `OWon` and `Tie` are terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Seats are still being filled.
    #[default]
    NotStarted,
    /// X to move.
    XTurn,
    /// O to move.
    OTurn,
    /// X completed a run of five.
    XWon,
    /// O completed a run of five.
    OWon,
    /// Game ended without a winner.
    Tie,
}

impl GameStatus {
    /// Status for the given player's turn.
    pub fn turn_of(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XTurn,
            Player::O => GameStatus::OTurn,
        }
    }

    /// Status for a win by the given player.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::X => GameStatus::XWon,
            Player::O => GameStatus::OWon,
        }
    }

    /// Returns the player to move, if the game is running.
    pub fn to_move(self) -> Option<Player> {
        match self {
            GameStatus::XTurn => Some(Player::X),
            GameStatus::OTurn => Some(Player::O),
            _ => None,
        }
    }

    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::XWon => Some(Player::X),
            GameStatus::OWon => Some(Player::O),
            _ => None,
        }
    }

    /// True while moves are being accepted.
    pub fn is_running(self) -> bool {
        self.to_move().is_some()
    }

    /// True once the game has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::XWon | GameStatus::OWon | GameStatus::Tie)
    }
}
