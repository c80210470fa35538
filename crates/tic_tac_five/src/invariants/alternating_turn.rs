//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{Player, TicTacToe};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern.
/// First move is always X. While the game runs, the player on
/// turn follows from the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<TicTacToe> for AlternatingTurnInvariant {
    fn holds(game: &TicTacToe) -> bool {
        let history = game.history();

        if let Some(first) = history.first()
            && first.player != Player::X
        {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        match game.current_player() {
            Some(to_move) => {
                let expected = if history.len() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                to_move == expected
            }
            None => true,
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameOptions, GameStatus, Move, PlayerKind};

    fn started() -> TicTacToe {
        let mut game = TicTacToe::new(GameOptions::default());
        game.add_player(PlayerKind::Human, "a").unwrap();
        game.add_player(PlayerKind::Human, "b").unwrap();
        game.start().unwrap();
        game
    }

    #[test]
    fn test_empty_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&started()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut game = started();
        for (i, (x, y)) in [(0, 0), (4, 4), (1, 0), (3, 4), (2, 0)].into_iter().enumerate() {
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            game.apply_move(Move::new(x, y, player)).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&game));
        assert_eq!(game.status(), GameStatus::OTurn);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut game = started();
        game.apply_move(Move::new(0, 0, Player::X)).unwrap();

        game.history.push(Move::new(1, 0, Player::X));

        assert!(!AlternatingTurnInvariant::holds(&game));
    }

    #[test]
    fn test_status_out_of_step_violates() {
        let mut game = started();
        game.apply_move(Move::new(0, 0, Player::X)).unwrap();

        game.status = GameStatus::XTurn;

        assert!(!AlternatingTurnInvariant::holds(&game));
    }
}
