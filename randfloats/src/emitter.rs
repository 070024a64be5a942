use std::io::{self, Write};

use gnurandom::GnuRandom;
use tracing::debug;

use crate::Notation;

/// Writes scaled samples from one generator as a single line of text.
///
/// Each value is followed by a space, and the line ends with a newline once
/// all values are written.
pub struct Emitter {
    rng: GnuRandom,
    notation: Notation,
}

impl Emitter {
    /// Create an emitter drawing from an already seeded generator.
    pub fn new(rng: GnuRandom, notation: Notation) -> Self {
        Self { rng, notation }
    }

    /// Write exactly `count` values, the newline, then flush `out`.
    pub fn emit<W: Write>(&mut self, count: usize, out: &mut W) -> io::Result<()> {
        debug!(count, notation = ?self.notation, "emitting values");

        for _ in 0..count {
            let value = self.rng.next_unit_f64();
            write!(out, "{} ", self.notation.render(value))?;
        }
        writeln!(out)?;
        out.flush()
    }
}
