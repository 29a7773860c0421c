//! Peg labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors produced when building peg labels.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PegError {
    #[error("Peg label must be a single character, got {0:?}")]
    NotSingleChar(String),

    #[error("Peg label {0:?} is not a printable character")]
    Unprintable(char),

    #[error("Peg labels must be distinct, '{0}' is used more than once")]
    Duplicate(Peg),
}

/// Single character label naming one of the three pegs.
///
/// Labels are printable and never whitespace, so a move always renders
/// as a single unambiguous token.
///
/// # Example
///
/// ```rust
/// use hanoi::core::Peg;
///
/// let peg = Peg::new('A').unwrap();
/// assert_eq!(peg.label(), 'A');
/// assert_eq!(peg.to_string(), "A");
/// assert!(Peg::new(' ').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Peg(char);

impl Peg {
    /// Create a peg from a printable, non-whitespace character.
    pub fn new(label: char) -> Result<Self, PegError> {
        if label.is_whitespace() || label.is_control() {
            return Err(PegError::Unprintable(label));
        }
        Ok(Self(label))
    }

    /// The character this peg is labelled with.
    pub fn label(self) -> char {
        self.0
    }
}

impl TryFrom<char> for Peg {
    type Error = PegError;

    fn try_from(label: char) -> Result<Self, Self::Error> {
        Self::new(label)
    }
}

impl From<Peg> for char {
    fn from(peg: Peg) -> Self {
        peg.0
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three pegs of a puzzle, by role.
///
/// Disks start on `source` and end on `destination`; `auxiliary` is the
/// spare. The default is `A` to `C` via `B`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPegs")]
pub struct Pegs {
    pub source: Peg,
    pub destination: Peg,
    pub auxiliary: Peg,
}

impl Pegs {
    /// Build a peg triple, rejecting repeated labels.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hanoi::core::{Peg, PegError, Pegs};
    ///
    /// let a = Peg::new('A').unwrap();
    /// let b = Peg::new('B').unwrap();
    /// let c = Peg::new('C').unwrap();
    ///
    /// assert!(Pegs::new(a, c, b).is_ok());
    /// assert_eq!(Pegs::new(a, a, b), Err(PegError::Duplicate(a)));
    /// ```
    pub fn new(source: Peg, destination: Peg, auxiliary: Peg) -> Result<Self, PegError> {
        if source == destination || source == auxiliary {
            return Err(PegError::Duplicate(source));
        }
        if destination == auxiliary {
            return Err(PegError::Duplicate(destination));
        }
        Ok(Self {
            source,
            destination,
            auxiliary,
        })
    }
}

#[derive(Deserialize)]
struct RawPegs {
    source: Peg,
    destination: Peg,
    auxiliary: Peg,
}

impl TryFrom<RawPegs> for Pegs {
    type Error = PegError;

    fn try_from(raw: RawPegs) -> Result<Self, Self::Error> {
        Self::new(raw.source, raw.destination, raw.auxiliary)
    }
}

impl Default for Pegs {
    fn default() -> Self {
        Self {
            source: Peg('A'),
            destination: Peg('C'),
            auxiliary: Peg('B'),
        }
    }
}
