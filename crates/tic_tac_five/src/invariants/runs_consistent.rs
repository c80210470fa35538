//! Runs consistent invariant: recorded run lengths match a full recount.

use super::super::TicTacToe;
use super::Invariant;

/// Invariant: every cell's recorded runs equal a from-scratch count.
///
/// The board only refreshes the runs through the cell just played; this
/// checks that doing so never leaves a stale count anywhere else.
pub struct RunsConsistentInvariant;

impl Invariant<TicTacToe> for RunsConsistentInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let board = game.board();
        board
            .cells()
            .iter()
            .zip(board.recompute_runs())
            .all(|(cell, fresh)| *cell.runs() == fresh)
    }

    fn description() -> &'static str {
        "Recorded run lengths match a full recount"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameOptions, Move, Player, PlayerKind};

    #[test]
    fn test_holds_through_a_game() {
        let mut game = TicTacToe::new(GameOptions::default());
        game.add_player(PlayerKind::Human, "a").unwrap();
        game.add_player(PlayerKind::Human, "b").unwrap();
        game.start().unwrap();

        let moves = [(2, 2), (0, 0), (3, 3), (4, 0), (1, 1), (2, 0), (3, 2), (1, 0)];
        for (i, (x, y)) in moves.into_iter().enumerate() {
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            game.apply_move(Move::new(x, y, player)).unwrap();
            assert!(RunsConsistentInvariant::holds(&game));
        }
    }
}
