//! Error types outside of move validation.

use super::action::MoveError;
use super::Player;

/// A coordinate lookup fell outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// `(x, y)` is not a cell of this board.
    #[display("({x}, {y}) is out of range")]
    OutOfRange {
        /// Column.
        x: usize,
        /// Row.
        y: usize,
    },
}

impl std::error::Error for BoardError {}

/// Error raised while seating players or starting a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Both seats are already taken.
    #[display("Game already has 2 players")]
    GameFull,

    /// Both seats must be filled first.
    #[display("Game needs 2 players before it can start")]
    NotReady,

    /// The game is already running.
    #[display("Game is already in progress")]
    AlreadyStarted,

    /// A seat has not accepted the rematch yet.
    #[display("{} has not accepted a rematch", _0)]
    RematchPending(Player),

    /// The options cannot describe a playable game.
    #[display("Invalid game options: {}", _0)]
    InvalidOptions(String),
}

impl std::error::Error for SetupError {}

/// Error raised when the AI is asked for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// Every cell is occupied.
    #[display("No moves available")]
    NoMovesAvailable,

    /// The game is waiting on a different player.
    #[display("It's not {}'s turn", _0)]
    NotAiTurn(Player),

    /// The game has ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for SearchError {}

/// Any error the game library can return.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// Move rejected.
    #[display("{}", _0)]
    Move(MoveError),
    /// Setup sequencing violated.
    #[display("{}", _0)]
    Setup(SetupError),
    /// AI could not pick a move.
    #[display("{}", _0)]
    Search(SearchError),
    /// Coordinate lookup failed.
    #[display("{}", _0)]
    Board(BoardError),
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Move(e) => Some(e),
            GameError::Setup(e) => Some(e),
            GameError::Search(e) => Some(e),
            GameError::Board(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_game_error_wraps_sources() {
        let err: GameError = SetupError::GameFull.into();
        assert_eq!(err.to_string(), "Game already has 2 players");
        assert!(err.source().is_some());

        let err: GameError = SearchError::NoMovesAvailable.into();
        assert!(matches!(err, GameError::Search(SearchError::NoMovesAvailable)));
    }
}
