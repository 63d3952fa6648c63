//! Console trait for operator I/O.
//!
//! This module defines the `Console` trait through which the session reads
//! instruction lines and the syscall handlers print output and read integers.
//! It provides:
//! 1. **Output:** Line-oriented writes for diagnostics and syscall output.
//! 2. **Input:** Line-oriented reads shared by the instruction loop and the read syscall.

use std::io;

/// Line-oriented operator console.
pub trait Console {
    /// Writes `text` followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Reads the next line with its terminator stripped; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}
