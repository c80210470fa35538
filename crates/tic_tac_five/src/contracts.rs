//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::game::TicTacToe;
use super::invariants::{GameInvariants, InvariantSet};
use super::GameStatus;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game is accepting moves.
pub struct GameRunning;

impl GameRunning {
    /// Rejects moves before start and after a terminal status.
    #[instrument(skip(game))]
    pub fn check(_mov: &Move, game: &TicTacToe) -> Result<(), MoveError> {
        match game.status() {
            GameStatus::NotStarted => Err(MoveError::NotStarted),
            s if s.is_terminal() => Err(MoveError::GameOver),
            _ => Ok(()),
        }
    }
}

/// Precondition: it must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move by the player who is not on turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &TicTacToe) -> Result<(), MoveError> {
        if game.current_player() != Some(mov.player) {
            Err(MoveError::WrongTurn(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the cell exists and is empty.
pub struct CellIsFree;

impl CellIsFree {
    /// Rejects off-board and occupied targets.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &TicTacToe) -> Result<(), MoveError> {
        let board = game.board();
        match board.get(mov.x, mov.y) {
            None => Err(MoveError::OutOfBounds { x: mov.x, y: mov.y }),
            Some(_) if !board.is_empty(mov.x, mov.y) => {
                Err(MoveError::CellOccupied { x: mov.x, y: mov.y })
            }
            Some(_) => Ok(()),
        }
    }
}

/// Composite precondition: a move is legal if the game runs, it's the
/// player's turn, and the cell is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &TicTacToe) -> Result<(), MoveError> {
        GameRunning::check(mov, game)?;
        PlayersTurn::check(mov, game)?;
        CellIsFree::check(mov, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions:
/// - Game is running
/// - Must be player's turn
/// - Cell must be on the board and empty
///
/// Postconditions:
/// - Exactly one more cell is claimed
/// - Recorded runs match a full recount
/// - Board matches a replay of the history
/// - Players alternate
pub struct MoveContract;

impl Contract<TicTacToe, Move> for MoveContract {
    fn pre(game: &TicTacToe, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &TicTacToe, after: &TicTacToe) -> Result<(), MoveError> {
        let grown = after.board().occupied_count() == before.board().occupied_count() + 1;
        if !grown {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move must claim exactly one cell".to_string(),
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
