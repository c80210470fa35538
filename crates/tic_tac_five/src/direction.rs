//! The four axes a run can lie along.

/// Axis of a run of same-owner cells.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::EnumCount,
)]
pub enum Direction {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// Slot of this direction in a cell's run array.
    pub fn index(self) -> usize {
        match self {
            Direction::Horizontal => 0,
            Direction::Vertical => 1,
            Direction::Diagonal => 2,
            Direction::AntiDiagonal => 3,
        }
    }

    /// Unit step `(dx, dy)` in the forward sense; the backward sense is its negation.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (-1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_indices_cover_run_array() {
        let mut seen = [false; Direction::COUNT];
        for dir in Direction::iter() {
            seen[dir.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_steps_are_unit_and_distinct() {
        let steps: Vec<_> = Direction::iter().map(Direction::step).collect();
        for (i, (dx, dy)) in steps.iter().enumerate() {
            assert!(dx.abs() <= 1 && dy.abs() <= 1 && (*dx, *dy) != (0, 0));
            for other in &steps[i + 1..] {
                assert_ne!((*dx, *dy), *other);
                assert_ne!((-*dx, -*dy), *other);
            }
        }
    }
}
