//! Stream-backed console.
//!
//! Adapts any buffered reader and writer pair (stdin/stdout in the CLI, byte
//! buffers in tests) to the [`Console`] trait.

use std::io::{self, BufRead, Write};

use super::traits::Console;

/// Console reading from `R` and writing to `W`.
#[derive(Debug)]
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    /// Creates a console over the given streams.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Returns the output stream.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Returns the output stream mutably.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Consumes the console, returning the input and output streams.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    /// Reads raw bytes up to the next newline; invalid UTF-8 is replaced rather
    /// than failing so that the decoder can report the offending character.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
