//! Move selection for computer-controlled seats.
//!
//! - [`minimax`]: depth-limited minimax over synthetic boards
//! - [`cache`]: bounded memo of evaluated positions

pub mod cache;
pub mod minimax;

pub use cache::{CacheEntry, CacheKey, SearchCache};
pub use minimax::{Minimax, SearchStats, WIN_SCORE};
