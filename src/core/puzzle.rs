//! Puzzle description.

use super::peg::Pegs;
use serde::{Deserialize, Serialize};

/// Largest supported disk count.
///
/// `2^64 - 1` moves is the most a `u64` move counter can number, and it
/// also bounds the solver's recursion depth.
pub const MAX_DISKS: u32 = 64;

/// A puzzle to solve: how many disks, and which pegs play which role.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub disks: u32,
    pub pegs: Pegs,
}

impl Puzzle {
    pub fn new(disks: u32, pegs: Pegs) -> Self {
        Self { disks, pegs }
    }

    /// Number of moves in the optimal solution, `2^disks - 1`.
    ///
    /// Saturates at `u64::MAX`, which is exact for `MAX_DISKS`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hanoi::core::{Pegs, Puzzle};
    ///
    /// assert_eq!(Puzzle::new(0, Pegs::default()).move_count(), 0);
    /// assert_eq!(Puzzle::new(3, Pegs::default()).move_count(), 7);
    /// assert_eq!(Puzzle::new(64, Pegs::default()).move_count(), u64::MAX);
    /// ```
    pub fn move_count(&self) -> u64 {
        match 1u64.checked_shl(self.disks) {
            Some(power) => power - 1,
            None => u64::MAX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_count_is_two_to_the_n_minus_one() {
        for disks in 0..=20 {
            let puzzle = Puzzle::new(disks, Pegs::default());
            assert_eq!(puzzle.move_count(), (1u64 << disks) - 1);
        }
    }

    #[test]
    fn move_count_handles_upper_bound() {
        assert_eq!(Puzzle::new(63, Pegs::default()).move_count(), (1u64 << 63) - 1);
        assert_eq!(Puzzle::new(MAX_DISKS, Pegs::default()).move_count(), u64::MAX);
    }

    #[test]
    fn puzzle_deserialization_validates_pegs() {
        let json = r#"{"disks":3,"pegs":{"source":"A","destination":"B","auxiliary":"A"}}"#;
        assert!(serde_json::from_str::<Puzzle>(json).is_err());

        let json = r#"{"disks":3,"pegs":{"source":"A","destination":"C","auxiliary":"B"}}"#;
        let puzzle: Puzzle = serde_json::from_str(json).unwrap();
        assert_eq!(puzzle, Puzzle::new(3, Pegs::default()));
    }
}
