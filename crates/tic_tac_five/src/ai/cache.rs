//! Bounded memo of evaluated positions.
//!
//! Entries are keyed by owner layout, remaining depth and side to move,
//! so a score found with a shallow budget is never reused for a deeper
//! one. Once the entry budget is exceeded the oldest insertions are
//! dropped first.

use crate::board::BoardKey;
use crate::Player;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use tracing::trace;

/// Identity of a searched position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    layout: BoardKey,
    depth: usize,
    to_move: Player,
}

impl CacheKey {
    /// Creates a key for `layout` searched `depth` plies deep with `to_move` on turn.
    pub fn new(layout: BoardKey, depth: usize, to_move: Player) -> Self {
        Self {
            layout,
            depth,
            to_move,
        }
    }

    /// Remaining depth this entry was searched with.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

/// Stored result for a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheEntry {
    /// Minimax value from the AI's point of view.
    pub score: i32,
    /// First best reply in row-major order, if the position had any.
    pub best_move: Option<(usize, usize)>,
}

/// Insertion-ordered cache with a fixed entry budget.
#[derive(Debug, Clone, Default)]
pub struct SearchCache {
    limit: usize,
    map: HashMap<CacheKey, CacheEntry>,
    order: VecDeque<CacheKey>,
}

impl SearchCache {
    /// Creates a cache holding at most `limit` entries. Zero disables caching.
    pub fn new(limit: usize) -> Self {
        let cap = limit.min(1 << 16);
        Self {
            limit,
            map: HashMap::with_capacity(cap),
            order: VecDeque::with_capacity(cap),
        }
    }

    /// Looks up a position.
    pub fn get(&self, key: &CacheKey) -> Option<CacheEntry> {
        self.map.get(key).copied()
    }

    /// Records a position, evicting the oldest entries if over budget.
    pub fn insert(&mut self, key: CacheKey, entry: CacheEntry) {
        if self.limit == 0 {
            return;
        }
        let inserted = match self.map.entry(key) {
            Entry::Occupied(mut e) => {
                e.insert(entry);
                None
            }
            Entry::Vacant(e) => {
                let key = e.key().clone();
                e.insert(entry);
                Some(key)
            }
        };

        if let Some(key) = inserted {
            self.order.push_back(key);
            while self.order.len() > self.limit {
                let Some(old) = self.order.pop_front() else {
                    break;
                };
                self.map.remove(&old);
                trace!(depth = old.depth, "Cache entry evicted");
            }
        }
    }

    /// Number of stored positions.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Entry budget.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;

    fn key_for(x: usize, depth: usize) -> CacheKey {
        let mut board = Board::new(5);
        board.place(x, 0, Player::X).unwrap();
        CacheKey::new(board.key(), depth, Player::O)
    }

    fn entry(score: i32) -> CacheEntry {
        CacheEntry {
            score,
            best_move: None,
        }
    }

    #[test]
    fn test_depth_separates_entries() {
        let mut cache = SearchCache::new(10);
        cache.insert(key_for(0, 1), entry(10));
        assert_eq!(cache.get(&key_for(0, 1)).map(|e| e.score), Some(10));
        assert_eq!(cache.get(&key_for(0, 2)), None);
    }

    #[test]
    fn test_oldest_entry_evicted_first() {
        let mut cache = SearchCache::new(2);
        cache.insert(key_for(0, 1), entry(1));
        cache.insert(key_for(1, 1), entry(2));
        cache.insert(key_for(2, 1), entry(3));

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get(&key_for(0, 1)), None);
        assert!(cache.get(&key_for(1, 1)).is_some());
        assert!(cache.get(&key_for(2, 1)).is_some());
    }

    #[test]
    fn test_reinsert_does_not_grow() {
        let mut cache = SearchCache::new(2);
        cache.insert(key_for(0, 1), entry(1));
        cache.insert(key_for(0, 1), entry(-1));
        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key_for(0, 1)).map(|e| e.score), Some(-1));
    }

    #[test]
    fn test_zero_limit_disables() {
        let mut cache = SearchCache::new(0);
        cache.insert(key_for(0, 1), entry(1));
        assert!(cache.is_empty());
    }
}
