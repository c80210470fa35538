//! Human player reading coordinates from a line-oriented input.

use super::Player;
use anyhow::{bail, Context, Result};
use derive_more::{Display, Error};
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tic_tac_five::{PlayerKind, TicTacToe};
use tracing::{debug, instrument};

/// Prompt shown before each move.
pub const PROMPT: &str = "Enter x,y coordinates separated by space (eg 0 1): ";

/// Why a line could not be read as coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// The line did not hold exactly two values.
    #[display("Expected two coordinates, got {count}")]
    WrongCount {
        /// Number of values found.
        count: usize,
    },
    /// A value was not a non-negative integer.
    #[display("'{token}' is not a valid coordinate")]
    NotANumber {
        /// Offending text.
        token: String,
    },
}

/// Parses a line of two whitespace-separated non-negative integers.
///
/// Range checking is left to the game, which knows the board size.
///
/// # Errors
///
/// Returns `ParseError` if the line does not hold exactly two integers.
#[instrument]
pub fn parse_coordinates(line: &str) -> Result<(usize, usize), ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x, y] = tokens[..] else {
        return Err(ParseError::WrongCount {
            count: tokens.len(),
        });
    };
    let number = |token: &str| {
        token.parse::<usize>().map_err(|_| ParseError::NotANumber {
            token: token.to_string(),
        })
    };
    Ok((number(x)?, number(y)?))
}

/// Input that several seats read from in turn.
pub type SharedInput<R> = Rc<RefCell<R>>;

/// Human player prompting on `output` and reading lines from `input`.
pub struct HumanPlayer<R, W> {
    name: String,
    input: SharedInput<R>,
    output: W,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    /// Creates a new human player with its own input.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self::with_shared_input(name, Rc::new(RefCell::new(input)), output)
    }

    /// Creates a human player reading from an input shared with other seats.
    pub fn with_shared_input(name: impl Into<String>, input: SharedInput<R>, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }

    /// Prints `prompt` and reads one line; `None` on end of input.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .borrow_mut()
            .read_line(&mut line)
            .context("Failed to read from input")?;
        Ok((read > 0).then_some(line))
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    #[instrument(skip(self, _game), fields(name = %self.name))]
    fn get_move(&mut self, _game: &TicTacToe) -> Result<(usize, usize)> {
        loop {
            let Some(line) = self.ask(PROMPT)? else {
                bail!("Input closed while waiting for {}'s move", self.name);
            };
            match parse_coordinates(&line) {
                Ok(coords) => return Ok(coords),
                Err(e) => {
                    debug!(error = %e, "Unparseable input");
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> PlayerKind {
        PlayerKind::Human
    }

    fn accepts_rematch(&mut self) -> Result<bool> {
        let prompt = format!("{}, play again? [y/N]: ", self.name);
        let answer = self.ask(&prompt)?.unwrap_or_default();
        Ok(matches!(answer.trim(), "y" | "Y" | "yes" | "Yes"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_accepts_extra_whitespace() {
        assert_eq!(parse_coordinates("  3   1 \n"), Ok((3, 1)));
    }

    #[test]
    fn test_parse_rejects_bad_lines() {
        assert_eq!(
            parse_coordinates("3"),
            Err(ParseError::WrongCount { count: 1 })
        );
        assert_eq!(
            parse_coordinates("1 2 3"),
            Err(ParseError::WrongCount { count: 3 })
        );
        assert_eq!(
            parse_coordinates("1,2"),
            Err(ParseError::WrongCount { count: 1 })
        );
        assert_eq!(
            parse_coordinates("-1 2"),
            Err(ParseError::NotANumber {
                token: "-1".to_string()
            })
        );
    }

    #[test]
    fn test_get_move_retries_until_valid() {
        let input = Cursor::new("hello\n2 x\n4 0\n");
        let mut out = Vec::new();
        let mut human = HumanPlayer::new("alice", input, &mut out);

        let coords = human.get_move(&TicTacToe::default()).unwrap();
        assert_eq!(coords, (4, 0));
        drop(human);

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches(PROMPT).count(), 3);
        assert!(text.contains("'x' is not a valid coordinate"));
    }

    #[test]
    fn test_get_move_fails_on_eof() {
        let mut human = HumanPlayer::new("alice", Cursor::new(""), Vec::new());
        assert!(human.get_move(&TicTacToe::default()).is_err());
    }

    #[test]
    fn test_rematch_answer() {
        let mut human = HumanPlayer::new("alice", Cursor::new("y\nn\n"), Vec::new());
        assert!(human.accepts_rematch().unwrap());
        assert!(!human.accepts_rematch().unwrap());
        assert!(!human.accepts_rematch().unwrap());
    }

    #[test]
    fn test_shared_input_reads_in_turn() {
        let input = Rc::new(RefCell::new(Cursor::new("0 0\n1 1\n")));
        let mut a = HumanPlayer::with_shared_input("a", Rc::clone(&input), Vec::new());
        let mut b = HumanPlayer::with_shared_input("b", input, Vec::new());
        let game = TicTacToe::default();
        assert_eq!(a.get_move(&game).unwrap(), (0, 0));
        assert_eq!(b.get_move(&game).unwrap(), (1, 1));
    }
}
