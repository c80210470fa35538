//! Plain-text rendering of the board and status line.

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};
use tic_tac_five::{GameStatus, Player as Mark, TicTacToe};

/// Display name of the seat playing `mark`.
fn seat_name(game: &TicTacToe, mark: Mark) -> String {
    game.seat(mark)
        .map(|seat| format!("{} ({})", seat.name(), mark))
        .unwrap_or_else(|| mark.to_string())
}

/// One-line summary of the game status.
pub fn status_line(game: &TicTacToe) -> String {
    match game.status() {
        GameStatus::NotStarted => "Waiting for players".to_string(),
        GameStatus::XTurn => format!("{} to move", seat_name(game, Mark::X)),
        GameStatus::OTurn => format!("{} to move", seat_name(game, Mark::O)),
        GameStatus::XWon => format!("{} wins!", seat_name(game, Mark::X)),
        GameStatus::OWon => format!("{} wins!", seat_name(game, Mark::O)),
        GameStatus::Tie => "It's a tie!".to_string(),
    }
}

/// Draws the board, the status line and an optional notice below it.
///
/// With `clear` set the screen is wiped first, so anything the player
/// must read belongs in `notice`.
pub fn render(
    out: &mut impl Write,
    game: &TicTacToe,
    clear: bool,
    notice: Option<&str>,
) -> io::Result<()> {
    if clear {
        execute!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    }
    write!(out, "{}", game.board().display())?;
    writeln!(out, "{}", status_line(game))?;
    if let Some(notice) = notice {
        writeln!(out, "{}", notice)?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tic_tac_five::{GameOptions, Move, PlayerKind};

    #[test]
    fn test_status_line_names_seats() {
        let mut game = TicTacToe::new(GameOptions::default());
        assert_eq!(status_line(&game), "Waiting for players");

        game.add_player(PlayerKind::Human, "alice").unwrap();
        game.add_player(PlayerKind::Ai, "bot").unwrap();
        game.start().unwrap();
        assert_eq!(status_line(&game), "alice (X) to move");

        game.apply_move(Move::new(0, 0, Mark::X)).unwrap();
        assert_eq!(status_line(&game), "bot (O) to move");

        game.end_game().unwrap();
        assert_eq!(status_line(&game), "It's a tie!");
    }

    #[test]
    fn test_render_without_clear_is_plain_text() {
        let mut game = TicTacToe::default();
        game.add_player(PlayerKind::Human, "a").unwrap();
        game.add_player(PlayerKind::Human, "b").unwrap();
        game.start().unwrap();

        let mut out = Vec::new();
        render(&mut out, &game, false, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("-|-|-|-|-|\n"));
        assert!(text.ends_with("a (X) to move\n"));
    }

    #[test]
    fn test_notice_follows_status_line() {
        let mut game = TicTacToe::default();
        game.add_player(PlayerKind::Human, "a").unwrap();
        game.add_player(PlayerKind::Human, "b").unwrap();
        game.start().unwrap();

        let mut out = Vec::new();
        render(&mut out, &game, true, Some("Invalid move: nope")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("a (X) to move\nInvalid move: nope\n"));
    }
}
