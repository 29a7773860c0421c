//! Input parsing errors.

use crate::core::PegError;
use thiserror::Error;

/// Errors that can occur when reading a puzzle description.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("No disk count given")]
    MissingDisks,

    #[error("Disk count must be a whole number, got {0:?}")]
    InvalidDisks(String),

    #[error("Disk count cannot be negative, got {0}")]
    NegativeDisks(String),

    #[error("Disk count {disks} exceeds the maximum of {max}")]
    TooManyDisks { disks: String, max: u32 },

    #[error("Expected either no peg labels or exactly three, got {0}")]
    PegCount(usize),

    #[error(transparent)]
    Peg(#[from] PegError),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
