//! Reading puzzle descriptions.
//!
//! Input is a whitespace-separated list of tokens: the disk count, then
//! optionally the source, destination and auxiliary peg labels.
//!
//! ```text
//! 3
//! 3 A C B
//! ```
//!
//! Without peg labels the default pegs (`A` to `C` via `B`) are used.

pub mod error;

pub use error::InputError;

use crate::core::{Peg, PegError, Pegs, Puzzle, MAX_DISKS};
use std::io::Read;
use std::num::{IntErrorKind, ParseIntError};
use tracing::debug;

/// Parse a disk count token.
///
/// # Example
///
/// ```rust
/// use hanoi::input::{parse_disks, InputError};
///
/// assert_eq!(parse_disks("4").unwrap(), 4);
/// assert!(matches!(parse_disks("-1"), Err(InputError::NegativeDisks(_))));
/// assert!(matches!(parse_disks("four"), Err(InputError::InvalidDisks(_))));
/// ```
pub fn parse_disks(token: &str) -> Result<u32, InputError> {
    let trimmed = token.trim();
    let too_many = || InputError::TooManyDisks {
        disks: trimmed.to_string(),
        max: MAX_DISKS,
    };

    let value: i64 = trimmed.parse().map_err(|err: ParseIntError| match err.kind() {
        IntErrorKind::PosOverflow => too_many(),
        IntErrorKind::NegOverflow => InputError::NegativeDisks(trimmed.to_string()),
        _ => InputError::InvalidDisks(token.to_string()),
    })?;

    if value < 0 {
        return Err(InputError::NegativeDisks(trimmed.to_string()));
    }
    match u32::try_from(value) {
        Ok(disks) if disks <= MAX_DISKS => Ok(disks),
        _ => Err(too_many()),
    }
}

/// Parse a peg label token, which must be exactly one character.
pub fn parse_peg(token: &str) -> Result<Peg, PegError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(label), None) => Peg::new(label),
        _ => Err(PegError::NotSingleChar(token.to_string())),
    }
}

impl Puzzle {
    /// Parse a puzzle from text in the `n [source destination auxiliary]` form.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hanoi::core::{Pegs, Puzzle};
    ///
    /// let puzzle = Puzzle::parse("3\n").unwrap();
    /// assert_eq!(puzzle, Puzzle::new(3, Pegs::default()));
    ///
    /// let puzzle = Puzzle::parse("2 X Z Y").unwrap();
    /// assert_eq!(puzzle.pegs.source.label(), 'X');
    /// assert_eq!(puzzle.pegs.destination.label(), 'Z');
    /// assert_eq!(puzzle.pegs.auxiliary.label(), 'Y');
    /// ```
    pub fn parse(text: &str) -> Result<Self, InputError> {
        let mut tokens = text.split_whitespace();
        let disks = parse_disks(tokens.next().ok_or(InputError::MissingDisks)?)?;

        let labels: Vec<&str> = tokens.collect();
        let pegs = match labels.as_slice() {
            [] => Pegs::default(),
            [source, destination, auxiliary] => Pegs::new(
                parse_peg(source)?,
                parse_peg(destination)?,
                parse_peg(auxiliary)?,
            )?,
            other => return Err(InputError::PegCount(other.len())),
        };

        debug!(
            disks,
            source = %pegs.source,
            destination = %pegs.destination,
            auxiliary = %pegs.auxiliary,
            "Parsed puzzle"
        );
        Ok(Self { disks, pegs })
    }

    /// Read all of `reader` and parse it as a puzzle.
    pub fn read_from<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::parse(&text)
    }
}
