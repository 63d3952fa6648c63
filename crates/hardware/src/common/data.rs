//! Memory Access Types.
//!
//! This module defines the classification of data memory accesses. The type is used for:
//! 1. **Fault Reporting:** Naming the instruction class in alignment and bounds errors.
//! 2. **Statistics Tracking:** Categorizing memory operations for the session summary.

use std::fmt;

/// Type of data memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessType {
    /// Data read access.
    ///
    /// Occurs during `lw` when reading a memory word into a register.
    Read,

    /// Data write access.
    ///
    /// Occurs during `sw` when writing a register into a memory word.
    Write,

    /// String read performed by the print-string syscall.
    StringRead,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Read => "load",
            Self::Write => "store",
            Self::StringRead => "string read",
        };
        f.write_str(name)
    }
}
