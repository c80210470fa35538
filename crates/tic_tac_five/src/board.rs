//! Board representation with per-cell run tracking.
//!
//! Every occupied cell remembers, for each [`Direction`], the length of
//! the contiguous same-owner run passing through it. The counts are
//! updated once per placement by walking outward from the new cell, so
//! win detection only has to look at the cell that was just played.

use super::action::MoveError;
use super::direction::Direction;
use super::error::BoardError;
use super::{Player, Square};
use strum::{EnumCount, IntoEnumIterator};
use tracing::{instrument, trace};

/// Length of a winning run.
pub const WIN_LENGTH: u8 = 5;

/// Side length of the documented variant.
pub const DEFAULT_SIZE: usize = 5;

/// Largest supported side length (run counts are stored as `u8`).
pub const MAX_SIZE: usize = u8::MAX as usize;

/// A single cell of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    square: Square,
    runs: [u8; Direction::COUNT],
}

impl Cell {
    fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            square: Square::Empty,
            runs: [0; Direction::COUNT],
        }
    }

    /// Column of this cell.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Row of this cell.
    pub fn y(&self) -> usize {
        self.y
    }

    /// Square contents.
    pub fn square(&self) -> Square {
        self.square
    }

    /// True if no player owns this cell.
    pub fn is_empty(&self) -> bool {
        self.square == Square::Empty
    }

    /// Run length through this cell in `dir`. Zero for empty cells.
    pub fn run(&self, dir: Direction) -> u8 {
        self.runs[dir.index()]
    }

    /// All run lengths, indexed by [`Direction::index`].
    pub fn runs(&self) -> &[u8; Direction::COUNT] {
        &self.runs
    }
}

/// Canonical key for a board's owner layout.
///
/// One character per cell in row-major order (`-`, `X`, `O`). Two boards
/// with the same owners produce the same key whatever order the moves
/// were played in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub struct BoardKey(String);

impl BoardKey {
    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Square grid of side `size`.
///
/// Cells are stored flat, `y * size + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board.
    ///
    /// `size` is capped at [`MAX_SIZE`] so every run length fits its counter.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let size = size.min(MAX_SIZE);
        let mut cells = Vec::with_capacity(size * size);
        for y in 0..size {
            for x in 0..size {
                cells.push(Cell::new(x, y));
            }
        }
        Self { size, cells }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True if `(x, y)` names a cell of this board.
    ///
    /// Takes signed coordinates so that a step off an edge can be tested.
    pub fn is_in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.size && (y as usize) < self.size
    }

    fn index_of(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.size && y < self.size).then(|| y * self.size + x)
    }

    fn index_of_signed(&self, x: isize, y: isize) -> Option<usize> {
        if self.is_in_bounds(x, y) {
            self.index_of(x as usize, y as usize)
        } else {
            None
        }
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `BoardError::OutOfRange` if the coordinates are off the board.
    pub fn cell_at(&self, x: usize, y: usize) -> Result<&Cell, BoardError> {
        self.index_of(x, y)
            .map(|i| &self.cells[i])
            .ok_or(BoardError::OutOfRange { x, y })
    }

    /// Square at `(x, y)`, or `None` off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Square> {
        self.index_of(x, y).map(|i| self.cells[i].square)
    }

    /// True if `(x, y)` is on the board and unclaimed.
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Some(Square::Empty))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Claims `(x, y)` for `player` and refreshes the runs through it.
    ///
    /// For each direction the run containing the new cell is measured by
    /// walking both ways until an edge or a cell with another owner, and
    /// its length is written into every cell of the run. Runs elsewhere
    /// are left alone.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::OutOfBounds` or `MoveError::CellOccupied`; the
    /// board is unchanged in either case.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn place(&mut self, x: usize, y: usize, player: Player) -> Result<(), MoveError> {
        let index = self.index_of(x, y).ok_or(MoveError::OutOfBounds { x, y })?;
        if !self.cells[index].is_empty() {
            return Err(MoveError::CellOccupied { x, y });
        }

        self.cells[index].square = Square::Occupied(player);

        for dir in Direction::iter() {
            let run = self.run_through(x, y, dir);
            let len = run.len() as u8;
            for i in run {
                self.cells[i].runs[dir.index()] = len;
            }
            trace!(%dir, len, "Run updated");
        }

        Ok(())
    }

    /// Indices of the same-owner run through `(x, y)` along `dir`.
    ///
    /// Empty for an empty or off-board origin. The origin comes first.
    pub(crate) fn run_through(&self, x: usize, y: usize, dir: Direction) -> Vec<usize> {
        let Some(origin) = self.index_of(x, y) else {
            return Vec::new();
        };
        let owner = self.cells[origin].square;
        if owner == Square::Empty {
            return Vec::new();
        }

        let mut run = vec![origin];
        let (dx, dy) = dir.step();
        for sign in [1, -1] {
            let (mut cx, mut cy) = (x as isize, y as isize);
            loop {
                cx += dx * sign;
                cy += dy * sign;
                match self.index_of_signed(cx, cy) {
                    Some(i) if self.cells[i].square == owner => run.push(i),
                    _ => break,
                }
            }
        }
        run
    }

    /// Run length recorded at `(x, y)` along `dir`. Zero off the board.
    pub fn run_at(&self, x: usize, y: usize, dir: Direction) -> u8 {
        self.cell_at(x, y).map(|c| c.run(dir)).unwrap_or(0)
    }

    /// True if any run recorded at `(x, y)` is exactly [`WIN_LENGTH`].
    pub fn wins(&self, x: usize, y: usize) -> bool {
        self.cell_at(x, y)
            .map(|c| c.runs.iter().any(|&len| len == WIN_LENGTH))
            .unwrap_or(false)
    }

    /// Owner of a winning run anywhere on the board.
    pub fn winner(&self) -> Option<Player> {
        self.cells
            .iter()
            .find(|c| c.runs.iter().any(|&len| len == WIN_LENGTH))
            .and_then(|c| c.square.owner())
    }

    /// True if every cell is claimed.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of claimed cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Coordinates of unclaimed cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .filter(|c| c.is_empty())
            .map(|c| (c.x, c.y))
    }

    /// Memoization key built from the owner of every cell.
    pub fn key(&self) -> BoardKey {
        BoardKey(self.cells.iter().map(|c| c.square.symbol()).collect())
    }

    /// Run lengths computed from scratch for every cell.
    ///
    /// Should always equal the incrementally maintained counts.
    pub(crate) fn recompute_runs(&self) -> Vec<[u8; Direction::COUNT]> {
        self.cells
            .iter()
            .map(|c| {
                let mut runs = [0; Direction::COUNT];
                for dir in Direction::iter() {
                    runs[dir.index()] = self.run_through(c.x, c.y, dir).len() as u8;
                }
                runs
            })
            .collect()
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Cells read `-`, `X` or `O`, each followed by `|`; every row is
    /// followed by a separator of `--` per column.
    pub fn display(&self) -> String {
        let mut result = String::with_capacity(self.size * (self.size * 4 + 2));
        for row in self.cells.chunks(self.size.max(1)) {
            for cell in row {
                result.push(cell.square.symbol());
                result.push('|');
            }
            result.push('\n');
            result.push_str(&"--".repeat(self.size));
            result.push('\n');
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}
