//! Turn sequencing, seats and status transitions.

use super::action::{Move, MoveError};
use super::board::Board;
use super::contracts::{Contract, MoveContract};
use super::error::SetupError;
use super::options::{GameOptions, GameType};
use super::{GameStatus, Player};
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Who controls a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    /// Moves come from a person.
    Human,
    /// Moves come from the minimax search.
    Ai,
}

/// A filled seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Seat {
    /// Controller type.
    kind: PlayerKind,
    /// Display name.
    name: String,
    /// Mark this seat plays.
    symbol: Player,
    /// Whether the seat agreed to play again after the game ended.
    #[new(value = "false")]
    accepted_rematch: bool,
}

/// A five-in-a-row match.
///
/// `NotStarted → {XTurn, OTurn} → {XWon, OWon, Tie}`. Both seats must be
/// filled before [`TicTacToe::start`] succeeds.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    pub(crate) options: GameOptions,
    pub(crate) board: Board,
    pub(crate) status: GameStatus,
    pub(crate) seats: [Option<Seat>; 2],
    pub(crate) history: Vec<Move>,
}

impl TicTacToe {
    /// Creates a game with no seats filled.
    ///
    /// The board stays empty (size 0) until [`TicTacToe::start`] has
    /// validated the options.
    #[instrument]
    pub fn new(options: GameOptions) -> Self {
        Self {
            board: Board::new(0),
            options,
            status: GameStatus::NotStarted,
            seats: [None, None],
            history: Vec::new(),
        }
    }

    /// Seats a player, X first then O.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::GameFull` if both seats are taken.
    #[instrument(skip(self, name), fields(name = %name.as_ref()))]
    pub fn add_player(
        &mut self,
        kind: PlayerKind,
        name: impl AsRef<str>,
    ) -> Result<Player, SetupError> {
        let Some(slot) = self.seats.iter().position(Option::is_none) else {
            warn!("Game already has 2 players");
            return Err(SetupError::GameFull);
        };
        let symbol = if slot == 0 { Player::X } else { Player::O };
        info!(%symbol, %kind, "Player seated");
        self.seats[slot] = Some(Seat::new(kind, name.as_ref().to_string(), symbol));
        Ok(symbol)
    }

    /// Starts the game on a fresh board with X to move.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::NotReady` unless both seats are filled,
    /// `AlreadyStarted` if moves are being accepted, or `InvalidOptions`.
    #[instrument(skip(self))]
    pub fn start(&mut self) -> Result<(), SetupError> {
        if self.status.is_running() {
            return Err(SetupError::AlreadyStarted);
        }
        if self.seats.iter().any(Option::is_none) {
            return Err(SetupError::NotReady);
        }
        self.options.validate()?;

        self.board = Board::new(self.options.size());
        self.history.clear();
        self.status = GameStatus::XTurn;
        info!(size = self.options.size(), "Game started");
        Ok(())
    }

    /// Applies a move and returns the resulting status.
    ///
    /// Every check happens before the board is touched, so a rejected
    /// move leaves the game exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns `NotStarted`, `GameOver`, `WrongTurn`, `OutOfBounds` or
    /// `CellOccupied`, checked in that order.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn apply_move(&mut self, action: Move) -> Result<GameStatus, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        if let Err(e) = MoveContract::pre(self, &action) {
            warn!(error = %e, "Move rejected");
            return Err(e);
        }

        self.board.place(action.x, action.y, action.player)?;
        self.history.push(action);

        self.status = if self.board.wins(action.x, action.y) {
            GameStatus::won_by(action.player)
        } else if self.board.is_full() {
            GameStatus::Tie
        } else {
            GameStatus::turn_of(action.player.opponent())
        };
        debug!(%action, status = %self.status, "Move applied");

        if self.status.is_terminal() {
            info!(status = %self.status, moves = self.history.len(), "Game finished");
        }

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(error = %e, "Postcondition failed, move rolled back");
            *self = before;
            return Err(e);
        }

        Ok(self.status)
    }

    /// Ends a running game as a tie.
    ///
    /// # Errors
    ///
    /// Returns `NotStarted` before the game starts and `GameOver` after it ends.
    #[instrument(skip(self))]
    pub fn end_game(&mut self) -> Result<GameStatus, MoveError> {
        match self.status {
            GameStatus::NotStarted => Err(MoveError::NotStarted),
            s if s.is_terminal() => Err(MoveError::GameOver),
            _ => {
                info!("Game ended by request");
                self.status = GameStatus::Tie;
                Ok(self.status)
            }
        }
    }

    /// Records that `symbol`'s seat wants to play again.
    ///
    /// # Errors
    ///
    /// Returns `SetupError::NotReady` if that seat is empty.
    #[instrument(skip(self))]
    pub fn accept_rematch(&mut self, symbol: Player) -> Result<(), SetupError> {
        let seat = self.seats[symbol.index()]
            .as_mut()
            .ok_or(SetupError::NotReady)?;
        seat.accepted_rematch = true;
        debug!(%symbol, "Rematch accepted");
        Ok(())
    }

    /// Starts a new game with the same seats once both accepted a rematch.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyStarted` while a game is running and
    /// `RematchPending` if a seat has not accepted.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<(), SetupError> {
        if self.status.is_running() {
            return Err(SetupError::AlreadyStarted);
        }
        if self.status.is_terminal() {
            for seat in self.seats.iter().flatten() {
                if !seat.accepted_rematch {
                    return Err(SetupError::RematchPending(seat.symbol));
                }
            }
        }
        self.start()?;
        for seat in self.seats.iter_mut().flatten() {
            seat.accepted_rematch = false;
        }
        Ok(())
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True while moves are accepted.
    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    /// The live board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied since the game started.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Options this game was created with.
    pub fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Player to move, if running.
    pub fn current_player(&self) -> Option<Player> {
        self.status.to_move()
    }

    /// Seat bound to `symbol`.
    pub fn seat(&self, symbol: Player) -> Option<&Seat> {
        self.seats[symbol.index()].as_ref()
    }

    /// First AI seat of a local-AI game.
    pub fn ai_player(&self) -> Option<&Seat> {
        if self.options.game_type() != GameType::LocalAi {
            return None;
        }
        self.seats
            .iter()
            .flatten()
            .find(|seat| seat.kind == PlayerKind::Ai)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new(GameOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> TicTacToe {
        let mut game = TicTacToe::default();
        game.add_player(PlayerKind::Human, "a").unwrap();
        game.add_player(PlayerKind::Human, "b").unwrap();
        game.start().unwrap();
        game
    }

    #[test]
    fn test_seats_fill_x_then_o() {
        let mut game = TicTacToe::default();
        assert_eq!(game.add_player(PlayerKind::Human, "a"), Ok(Player::X));
        assert_eq!(game.add_player(PlayerKind::Ai, "b"), Ok(Player::O));
        assert_eq!(game.seat(Player::O).map(|s| *s.kind()), Some(PlayerKind::Ai));
        assert_eq!(game.seat(Player::X).map(|s| s.name().as_str()), Some("a"));
    }

    #[test]
    fn test_move_before_start_rejected() {
        let mut game = TicTacToe::default();
        assert_eq!(
            game.apply_move(Move::new(0, 0, Player::X)),
            Err(MoveError::NotStarted)
        );
    }

    #[test]
    fn test_start_twice_rejected() {
        let mut game = started();
        assert_eq!(game.start(), Err(SetupError::AlreadyStarted));
    }

    #[test]
    fn test_end_game_ties() {
        let mut game = started();
        assert_eq!(game.end_game(), Ok(GameStatus::Tie));
        assert_eq!(game.end_game(), Err(MoveError::GameOver));
        assert_eq!(
            game.apply_move(Move::new(0, 0, Player::X)),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_restart_needs_both_rematches() {
        let mut game = started();
        game.apply_move(Move::new(0, 0, Player::X)).unwrap();
        game.end_game().unwrap();

        assert_eq!(game.restart(), Err(SetupError::RematchPending(Player::X)));
        game.accept_rematch(Player::X).unwrap();
        assert_eq!(game.restart(), Err(SetupError::RematchPending(Player::O)));
        game.accept_rematch(Player::O).unwrap();

        assert_eq!(game.restart(), Ok(()));
        assert_eq!(game.status(), GameStatus::XTurn);
        assert!(game.history().is_empty());
        assert_eq!(game.board().occupied_count(), 0);
        assert!(!*game.seat(Player::X).unwrap().accepted_rematch());
    }

    #[test]
    fn test_ai_player_only_in_local_ai_games() {
        let mut game = TicTacToe::new(GameOptions::new().with_game_type(GameType::LocalAi));
        game.add_player(PlayerKind::Human, "me").unwrap();
        game.add_player(PlayerKind::Ai, "bot").unwrap();
        assert_eq!(game.ai_player().map(|s| *s.symbol()), Some(Player::O));

        let mut hot_seat = TicTacToe::default();
        hot_seat.add_player(PlayerKind::Ai, "bot").unwrap();
        assert!(hot_seat.ai_player().is_none());
    }

    #[test]
    fn test_oversized_options_rejected_at_start() {
        let mut game = TicTacToe::new(GameOptions::new().with_size(1 << 33));
        assert_eq!(game.board().size(), 0);
        game.add_player(PlayerKind::Human, "a").unwrap();
        game.add_player(PlayerKind::Human, "b").unwrap();
        assert!(matches!(game.start(), Err(SetupError::InvalidOptions(_))));
        assert_eq!(game.status(), GameStatus::NotStarted);
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_failed_postcondition_rolls_back() {
        let mut game = started();
        // A cell claimed outside the history breaks the replay check.
        game.board.place(0, 0, Player::O).unwrap();
        let corrupted = game.board().clone();

        assert!(matches!(
            game.apply_move(Move::new(1, 1, Player::X)),
            Err(MoveError::InvariantViolation(_))
        ));
        assert_eq!(game.board(), &corrupted);
        assert!(game.history().is_empty());
        assert_eq!(game.status(), GameStatus::XTurn);
    }

    #[test]
    fn test_invalid_options_block_start() {
        let mut game = TicTacToe::new(GameOptions::new().with_size(3));
        game.add_player(PlayerKind::Human, "a").unwrap();
        game.add_player(PlayerKind::Human, "b").unwrap();
        assert!(matches!(game.start(), Err(SetupError::InvalidOptions(_))));
        assert_eq!(game.status(), GameStatus::NotStarted);
    }
}
