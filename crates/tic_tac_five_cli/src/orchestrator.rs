//! Turn loop between two players.

use crate::players::Player;
use crate::ui;
use anyhow::{Context, Result};
use std::io::Write;
use tic_tac_five::{GameOptions, GameStatus, Move, Player as Mark, TicTacToe};
use tracing::{debug, info, instrument, warn};

/// Drives a game between two players, rendering to `out`.
pub struct Orchestrator<W> {
    game: TicTacToe,
    players: [Box<dyn Player>; 2],
    out: W,
    clear_screen: bool,
    notice: Option<String>,
}

impl<W: Write> Orchestrator<W> {
    /// Seats `player_x` and `player_o` and starts the first game.
    ///
    /// # Errors
    ///
    /// Fails if the options describe an unplayable game.
    #[instrument(skip_all, fields(x = player_x.name(), o = player_o.name()))]
    pub fn new(
        options: GameOptions,
        player_x: Box<dyn Player>,
        player_o: Box<dyn Player>,
        out: W,
    ) -> Result<Self> {
        let mut game = TicTacToe::new(options);
        for player in [&player_x, &player_o] {
            game.add_player(player.kind(), player.name())?;
        }
        game.start().context("Failed to start game")?;

        Ok(Self {
            game,
            players: [player_x, player_o],
            out,
            clear_screen: true,
            notice: None,
        })
    }

    /// Whether to clear the terminal before each render.
    pub fn with_clear_screen(mut self, clear: bool) -> Self {
        self.clear_screen = clear;
        self
    }

    /// The game being played.
    pub fn game(&self) -> &TicTacToe {
        &self.game
    }

    /// Plays the current game to its end and returns the final status.
    ///
    /// A rejected move is reported under the next frame and the same
    /// player is asked again.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move or output cannot be written.
    #[instrument(skip(self))]
    pub fn play_game(&mut self) -> Result<GameStatus> {
        info!("Starting game orchestration");

        loop {
            let notice = self.notice.take();
            ui::render(&mut self.out, &self.game, self.clear_screen, notice.as_deref())?;

            let Some(mark) = self.game.current_player() else {
                let status = self.game.status();
                info!(%status, moves = self.game.history().len(), "Game over");
                return Ok(status);
            };

            let player = &mut self.players[mark.index()];
            debug!(player = %player.name(), %mark, "Waiting for move");
            let (x, y) = player.get_move(&self.game)?;

            if let Err(e) = self.game.apply_move(Move::new(x, y, mark)) {
                warn!(error = %e, %mark, "Move rejected, asking again");
                self.notice = Some(format!("Invalid move: {}", e));
            }
        }
    }

    /// Asks every player for a rematch and restarts if all agree.
    ///
    /// Returns `false` as soon as one player declines.
    #[instrument(skip(self))]
    pub fn offer_rematch(&mut self) -> Result<bool> {
        for mark in [Mark::X, Mark::O] {
            if !self.players[mark.index()].accepts_rematch()? {
                info!(%mark, "Rematch declined");
                return Ok(false);
            }
            self.game.accept_rematch(mark)?;
        }
        self.game.restart()?;
        info!("Rematch started");
        Ok(true)
    }

    /// Plays games until a player declines a rematch; returns how many were played.
    pub fn run(&mut self) -> Result<usize> {
        let mut played = 0;
        loop {
            self.play_game()?;
            played += 1;
            if !self.offer_rematch()? {
                return Ok(played);
            }
        }
    }
}
