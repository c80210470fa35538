//! Monotonic board invariant: cells never change once claimed.

use super::super::{Board, TicTacToe};
use super::Invariant;

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Once a cell is claimed it never changes. This is verified by
/// replaying the move history onto an empty board and comparing
/// owner layouts.
pub struct MonotonicBoardInvariant;

impl Invariant<TicTacToe> for MonotonicBoardInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let mut reconstructed = Board::new(game.board().size());

        for mov in game.history() {
            // Cell must be free before placing
            if reconstructed.place(mov.x, mov.y, mov.player).is_err() {
                return false;
            }
        }

        reconstructed.key() == game.board().key()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
