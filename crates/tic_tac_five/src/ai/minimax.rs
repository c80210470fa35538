//! Depth-limited minimax search.
//!
//! The AI explores clones of the live board, never the board itself.
//! Candidates are visited in row-major order and a later candidate only
//! replaces the current best when its score is strictly greater, so the
//! chosen move is deterministic.

use super::cache::{CacheEntry, CacheKey, SearchCache};
use crate::board::Board;
use crate::error::SearchError;
use crate::game::TicTacToe;
use crate::options::GameOptions;
use crate::Player;
use tracing::{debug, instrument};

/// Leaf score for a position won by the AI; the opponent's win is its negation.
pub const WIN_SCORE: i32 = 10;

/// Counters from the most recent decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Positions evaluated.
    pub nodes: u64,
    /// Evaluations answered from the cache.
    pub cache_hits: u64,
}

/// Minimax player for one symbol.
#[derive(Debug, Clone)]
pub struct Minimax {
    symbol: Player,
    max_depth: usize,
    cache: SearchCache,
    stats: SearchStats,
}

impl Minimax {
    /// Creates a searcher for `symbol` with a `max_depth` ply budget.
    ///
    /// A budget of zero is treated as one: the AI always looks at its own move.
    #[instrument]
    pub fn new(symbol: Player, max_depth: usize, cache_capacity: usize) -> Self {
        Self {
            symbol,
            max_depth: max_depth.max(1),
            cache: SearchCache::new(cache_capacity),
            stats: SearchStats::default(),
        }
    }

    /// Creates a searcher using the depth and cache budget from `options`.
    pub fn from_options(symbol: Player, options: &GameOptions) -> Self {
        Self::new(symbol, options.search_depth(), options.cache_capacity())
    }

    /// Symbol this AI plays.
    pub fn symbol(&self) -> Player {
        self.symbol
    }

    /// Ply budget.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Counters from the last call to [`Minimax::choose_move`].
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Number of memoized positions.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Forgets every memoized position.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Picks a move for the game's current position.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::GameOver` for a finished game, `NotAiTurn`
    /// when another player is on turn, and `NoMovesAvailable` for a full
    /// board.
    #[instrument(skip(self, game), fields(symbol = %self.symbol, status = %game.status()))]
    pub fn choose_for(&mut self, game: &TicTacToe) -> Result<(usize, usize), SearchError> {
        let status = game.status();
        if status.is_terminal() {
            return Err(SearchError::GameOver);
        }
        if status.to_move() != Some(self.symbol) {
            return Err(SearchError::NotAiTurn(self.symbol));
        }
        self.choose_move(game.board())
    }

    /// Picks a move on `board` with this AI to move.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::NoMovesAvailable` if every cell is claimed.
    #[instrument(skip(self, board), fields(symbol = %self.symbol, depth = self.max_depth))]
    pub fn choose_move(&mut self, board: &Board) -> Result<(usize, usize), SearchError> {
        self.stats = SearchStats::default();

        let root = CacheKey::new(board.key(), self.max_depth, self.symbol);
        if let Some(best) = self.cache.get(&root).and_then(|e| e.best_move) {
            self.stats.cache_hits += 1;
            debug!(x = best.0, y = best.1, "Move answered from cache");
            return Ok(best);
        }

        let mut best: Option<((usize, usize), i32)> = None;
        for (x, y) in board.empty_cells() {
            let mut child = board.clone();
            if child.place(x, y, self.symbol).is_err() {
                continue;
            }
            let score = self.evaluate(&child, (x, y), self.max_depth - 1, self.symbol.opponent());
            if best.is_none_or(|(_, top)| score > top) {
                best = Some(((x, y), score));
            }
        }

        let Some((coords, score)) = best else {
            return Err(SearchError::NoMovesAvailable);
        };

        self.cache.insert(
            root,
            CacheEntry {
                score,
                best_move: Some(coords),
            },
        );
        debug!(
            x = coords.0,
            y = coords.1,
            score,
            nodes = self.stats.nodes,
            cache_hits = self.stats.cache_hits,
            cache_len = self.cache.len(),
            "Move chosen"
        );
        Ok(coords)
    }

    /// Minimax value of `board`, reached by a move at `last`, with `to_move` on turn.
    fn evaluate(
        &mut self,
        board: &Board,
        last: (usize, usize),
        depth: usize,
        to_move: Player,
    ) -> i32 {
        self.stats.nodes += 1;

        if board.wins(last.0, last.1) {
            return if to_move.opponent() == self.symbol {
                WIN_SCORE
            } else {
                -WIN_SCORE
            };
        }
        if depth == 0 || board.is_full() {
            return 0;
        }

        let key = CacheKey::new(board.key(), depth, to_move);
        if let Some(entry) = self.cache.get(&key) {
            self.stats.cache_hits += 1;
            return entry.score;
        }

        let maximizing = to_move == self.symbol;
        let mut value = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for (x, y) in board.empty_cells() {
            let mut child = board.clone();
            if child.place(x, y, to_move).is_err() {
                continue;
            }
            let score = self.evaluate(&child, (x, y), depth - 1, to_move.opponent());
            let better = if maximizing { score > value } else { score < value };
            if better {
                value = score;
                best_move = Some((x, y));
            }
        }

        self.cache.insert(key, CacheEntry { score: value, best_move });
        value
    }
}
