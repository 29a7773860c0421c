//! Textual move log.
//!
//! Moves are written as `From->To` tokens, eight per line. Each line opens
//! with the zero-based index of its first move, right-aligned in five
//! columns and followed by `": "`:
//!
//! ```text
//!
//!     0: A->B A->C B->C A->B C->A C->B A->B A->C
//!     8: B->C B->A C->A B->C A->B A->C B->C
//! ```

use crate::core::{Move, MoveSink};
use std::io::{self, Write};

/// Moves written on each output line.
pub const MOVES_PER_LINE: u64 = 8;

/// Width of the right-aligned move index at the start of each line.
pub const INDEX_WIDTH: usize = 5;

/// Writes moves to an output stream, tracking how many have been written.
///
/// The counter lives in the printer value, so independent printers never
/// share numbering.
///
/// # Example
///
/// ```rust
/// use hanoi::core::{Move, Peg};
/// use hanoi::printer::MovePrinter;
///
/// let a = Peg::new('A').unwrap();
/// let c = Peg::new('C').unwrap();
///
/// let mut printer = MovePrinter::new(Vec::new());
/// printer.print(Move::new(a, c)).unwrap();
/// assert_eq!(printer.count(), 1);
///
/// let out = printer.finish().unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "\n    0: A->C\n");
/// ```
#[derive(Debug)]
pub struct MovePrinter<W: Write> {
    writer: W,
    count: u64,
}

impl<W: Write> MovePrinter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, count: 0 }
    }

    /// Number of moves written so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Write one move, starting a new numbered line every `MOVES_PER_LINE` moves.
    pub fn print(&mut self, mv: Move) -> io::Result<()> {
        if self.count % MOVES_PER_LINE == 0 {
            write!(self.writer, "\n{:>width$}: ", self.count, width = INDEX_WIDTH)?;
        } else {
            self.writer.write_all(b" ")?;
        }
        write!(self.writer, "{mv}")?;
        self.count += 1;
        Ok(())
    }

    /// Terminate the last line, flush, and hand back the writer.
    ///
    /// Nothing is written when no move was printed.
    pub fn finish(mut self) -> io::Result<W> {
        if self.count > 0 {
            self.writer.write_all(b"\n")?;
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: Write> MoveSink for MovePrinter<W> {
    type Error = io::Error;

    fn record(&mut self, mv: Move) -> Result<(), Self::Error> {
        self.print(mv)
    }
}
