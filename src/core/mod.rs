//! Core puzzle types.
//!
//! This module contains the plain values the rest of the crate passes around:
//! - Peg labels and the (source, destination, auxiliary) triple
//! - Single disk moves and the `MoveSink` seam that consumes them
//! - The puzzle description (disk count plus pegs)
//!
//! Nothing in here performs I/O.

mod moves;
mod peg;
mod puzzle;

pub use moves::{Move, MoveSink};
pub use peg::{Peg, PegError, Pegs};
pub use puzzle::{Puzzle, MAX_DISKS};
