//! Hanoi: Tower of Hanoi move sequences
//!
//! The solver recursively expands an n-disk transfer into the canonical
//! sequence of `2^n - 1` single-disk moves. Moves flow into a `MoveSink`,
//! so the same solver feeds the text printer, an in-memory list, or
//! anything else that consumes moves.
//!
//! # Core Concepts
//!
//! - **Pegs**: single character labels playing the source, destination and auxiliary roles
//! - **Solver**: recursive decomposition producing moves in canonical order
//! - **Printer**: the `From->To` move log, eight moves per numbered line
//!
//! # Example
//!
//! ```rust
//! use hanoi::core::Puzzle;
//! use hanoi::printer::MovePrinter;
//! use hanoi::solver::solve;
//!
//! let puzzle = Puzzle::parse("2").unwrap();
//! let mut printer = MovePrinter::new(Vec::new());
//! solve(&puzzle, &mut printer).unwrap();
//!
//! let out = String::from_utf8(printer.finish().unwrap()).unwrap();
//! assert_eq!(out, "\n    0: A->B A->C B->C\n");
//! ```

pub mod core;
pub mod input;
pub mod printer;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{Move, MoveSink, Peg, Pegs, Puzzle, MAX_DISKS};
pub use input::{parse_disks, parse_peg, InputError};
pub use printer::MovePrinter;
pub use solver::{solve, Solution, SolveError, MAX_COLLECTED_DISKS};
