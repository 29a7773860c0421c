//! Disk moves and the sink that consumes them.

use super::peg::Peg;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;

/// Transfer of the top disk from one peg to another.
///
/// Renders as `From->To`, e.g. `A->C`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Peg the disk is lifted from
    pub from: Peg,
    /// Peg the disk is placed on
    pub to: Peg,
}

impl Move {
    pub fn new(from: Peg, to: Peg) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)
    }
}

/// Consumer of the moves produced by the solver.
///
/// The solver calls `record` once per move, in emission order, and stops at
/// the first error.
pub trait MoveSink {
    type Error;

    fn record(&mut self, mv: Move) -> Result<(), Self::Error>;
}

impl MoveSink for Vec<Move> {
    type Error = Infallible;

    fn record(&mut self, mv: Move) -> Result<(), Self::Error> {
        self.push(mv);
        Ok(())
    }
}
