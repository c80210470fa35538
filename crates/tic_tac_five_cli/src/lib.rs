//! Terminal front end for tic_tac_five.
//!
//! Parses flags and an optional config file, seats human and AI players,
//! and runs the turn loop until nobody wants a rematch.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod orchestrator;
pub mod players;
pub mod ui;

pub use cli::{Cli, Mode};
pub use config::{AppConfig, ConfigError};
pub use orchestrator::Orchestrator;

use anyhow::Result;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;
use tic_tac_five::{GameType, Player as Mark};
use tracing::{info, instrument};

use players::{HumanPlayer, MinimaxPlayer, Player};

/// Name of the AI seat.
pub const AI_NAME: &str = "Minimax";

/// Builds the two players for `config`, X first.
///
/// Humans share one lock on stdin and prompt on stdout.
pub fn seat_players(config: &AppConfig, ai_first: bool) -> [Box<dyn Player>; 2] {
    let stdin = Rc::new(RefCell::new(io::stdin().lock()));
    let human = |name: &str| -> Box<dyn Player> {
        Box::new(HumanPlayer::with_shared_input(
            name,
            Rc::clone(&stdin),
            io::stdout(),
        ))
    };
    let options = config.game();

    match options.game_type() {
        GameType::HotSeat => [human(config.player_name()), human("Player 2")],
        GameType::LocalAi if ai_first => [
            Box::new(MinimaxPlayer::new(AI_NAME, Mark::X, options)),
            human(config.player_name()),
        ],
        GameType::LocalAi => [
            human(config.player_name()),
            Box::new(MinimaxPlayer::new(AI_NAME, Mark::O, options)),
        ],
    }
}

/// Runs the game described by `cli`, writing the board to `out`.
///
/// # Errors
///
/// Fails on config errors, invalid options, or closed input.
#[instrument(skip(cli, out))]
pub fn run(cli: &Cli, out: impl Write) -> Result<()> {
    let config = cli.resolve()?;
    let [player_x, player_o] = seat_players(&config, cli.ai_first);

    let mut orchestrator =
        Orchestrator::new(*config.game(), player_x, player_o, out)?.with_clear_screen(!cli.no_clear);
    let played = orchestrator.run()?;
    info!(played, "Session finished");
    Ok(())
}
