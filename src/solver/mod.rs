//! Recursive Tower of Hanoi solver.
//!
//! To move `n` disks from a source to a destination peg, first move the top
//! `n - 1` disks out of the way onto the auxiliary peg, move the largest disk
//! to the destination, then move the `n - 1` disks from the auxiliary peg on
//! top of it. This yields the unique optimal sequence of `2^n - 1` moves and
//! never places a disk on a smaller one.

pub mod error;

pub use error::SolveError;

use crate::core::{Move, MoveSink, Peg, Puzzle, MAX_DISKS};
use serde::Serialize;
use std::convert::Infallible;
use tracing::{debug, trace};

/// Emit the moves solving `puzzle` into `sink`, in canonical order.
///
/// Stops at the first sink error. Recursion depth equals the disk count,
/// which is bounded by `MAX_DISKS`.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Pegs, Puzzle};
/// use hanoi::solver::solve;
///
/// let mut moves = Vec::new();
/// solve(&Puzzle::new(2, Pegs::default()), &mut moves).unwrap();
///
/// let rendered: Vec<String> = moves.iter().map(|m| m.to_string()).collect();
/// assert_eq!(rendered, ["A->B", "A->C", "B->C"]);
/// ```
pub fn solve<K: MoveSink>(puzzle: &Puzzle, sink: &mut K) -> Result<(), SolveError<K::Error>> {
    if puzzle.disks > MAX_DISKS {
        return Err(SolveError::TooManyDisks {
            disks: puzzle.disks,
            max: MAX_DISKS,
        });
    }

    let pegs = puzzle.pegs;
    debug!(
        disks = puzzle.disks,
        source = %pegs.source,
        destination = %pegs.destination,
        auxiliary = %pegs.auxiliary,
        moves = puzzle.move_count(),
        "Solving puzzle"
    );

    transfer(
        puzzle.disks,
        pegs.source,
        pegs.destination,
        pegs.auxiliary,
        sink,
    )
    .map_err(SolveError::Sink)
}

fn transfer<K: MoveSink>(
    disks: u32,
    from: Peg,
    to: Peg,
    via: Peg,
    sink: &mut K,
) -> Result<(), K::Error> {
    if disks == 0 {
        return Ok(());
    }
    trace!(disks, %from, %to, "transfer");

    transfer(disks - 1, from, via, to, sink)?;
    sink.record(Move::new(from, to))?;
    transfer(disks - 1, via, to, from, sink)
}

/// Largest disk count whose moves `moves` will hold in memory.
pub const MAX_COLLECTED_DISKS: u32 = 20;

/// Collect the full move sequence for `puzzle`.
///
/// The result holds `2^disks - 1` moves, so puzzles above
/// `MAX_COLLECTED_DISKS` are rejected; stream through `solve` instead.
pub fn moves(puzzle: &Puzzle) -> Result<Vec<Move>, SolveError<Infallible>> {
    if puzzle.disks > MAX_COLLECTED_DISKS {
        return Err(SolveError::TooManyDisks {
            disks: puzzle.disks,
            max: MAX_COLLECTED_DISKS,
        });
    }

    let hint = usize::try_from(puzzle.move_count()).unwrap_or(usize::MAX);
    let mut out = Vec::with_capacity(hint);
    solve(puzzle, &mut out)?;
    Ok(out)
}

/// A solved puzzle, as reported in machine-readable output.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Solution {
    pub disks: u32,
    pub source: Peg,
    pub destination: Peg,
    pub auxiliary: Peg,
    pub total: u64,
    pub moves: Vec<Move>,
}

impl Solution {
    pub fn solve(puzzle: &Puzzle) -> Result<Self, SolveError<Infallible>> {
        let moves = moves(puzzle)?;
        Ok(Self {
            disks: puzzle.disks,
            source: puzzle.pegs.source,
            destination: puzzle.pegs.destination,
            auxiliary: puzzle.pegs.auxiliary,
            total: moves.len() as u64,
            moves,
        })
    }
}
