//! Solver errors.

use thiserror::Error;

/// Errors that can occur while solving a puzzle.
///
/// `E` is the error type of the `MoveSink` receiving the moves.
#[derive(Debug, Error)]
pub enum SolveError<E> {
    #[error("Cannot solve {disks} disks, at most {max} are supported")]
    TooManyDisks { disks: u32, max: u32 },

    #[error("Failed to record move")]
    Sink(#[source] E),
}
