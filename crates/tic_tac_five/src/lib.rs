//! Five-in-a-row game logic.
//!
//! A turn-based grid game: two players alternately claim cells of a
//! square board, and the first to own a run of exactly five in a row,
//! column or diagonal wins.
//!
//! # Architecture
//!
//! - **Board**: flat cell grid with per-direction run lengths, updated once per placement
//! - **Game**: seats, turn order and status transitions, guarded by contracts
//! - **AI**: depth-limited minimax with a bounded memo cache
//!
//! # Example
//!
//! ```
//! use tic_tac_five::{GameOptions, GameStatus, Minimax, Move, Player, PlayerKind, TicTacToe};
//!
//! # fn example() -> Result<(), tic_tac_five::GameError> {
//! let mut game = TicTacToe::new(GameOptions::default());
//! game.add_player(PlayerKind::Human, "alice")?;
//! game.add_player(PlayerKind::Ai, "bot")?;
//! game.start()?;
//!
//! game.apply_move(Move::new(2, 2, Player::X))?;
//!
//! let mut ai = Minimax::new(Player::O, 2, 10_000);
//! let (x, y) = ai.choose_for(&game)?;
//! assert_eq!(game.apply_move(Move::new(x, y, Player::O))?, GameStatus::XTurn);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod direction;
mod error;
mod game;
mod options;
mod types;

pub mod ai;
pub mod invariants;

// Crate-level exports - Domain types
pub use types::{GameStatus, Player, Square};

// Crate-level exports - Board
pub use board::{Board, BoardKey, Cell, DEFAULT_SIZE, MAX_SIZE, WIN_LENGTH};
pub use direction::Direction;

// Crate-level exports - Moves and errors
pub use action::{Move, MoveError};
pub use error::{BoardError, GameError, SearchError, SetupError};

// Crate-level exports - Game
pub use contracts::{CellIsFree, Contract, GameRunning, LegalMove, MoveContract, PlayersTurn};
pub use game::{PlayerKind, Seat, TicTacToe};
pub use options::{GameOptions, GameType};

// Crate-level exports - AI
pub use ai::{Minimax, SearchStats};
