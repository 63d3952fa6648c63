//! MIPS General-Purpose Register File.
//!
//! This module implements the General-Purpose Register (GPR) file. It performs the following:
//! 1. **Storage:** Maintains 32 signed 32-bit integer registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Ensures that register `$0` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use std::io::{self, Write};

use crate::common::constants::NUM_REGS;
use crate::isa::abi::{self, reg_name};

/// General-Purpose Register file.
///
/// Register `$0` is hardwired to zero and cannot be modified.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Gpr {
    regs: [i32; NUM_REGS],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-31).
    ///
    /// # Returns
    ///
    /// The value stored in the register. Register `$0` and out-of-range indices read 0.
    pub fn read(&self, idx: usize) -> i32 {
        if idx == abi::REG_ZERO {
            0
        } else {
            self.regs.get(idx).copied().unwrap_or(0)
        }
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `$0` and to out-of-range indices are ignored.
    pub fn write(&mut self, idx: usize, val: i32) {
        if idx == abi::REG_ZERO {
            return;
        }
        if let Some(slot) = self.regs.get_mut(idx) {
            *slot = val;
        }
    }

    /// Dumps all registers, four per line, in decimal with their ABI names.
    pub fn dump(&self, out: &mut impl Write) -> io::Result<()> {
        for base in (0..NUM_REGS).step_by(4) {
            let line = (base..base + 4)
                .map(|i| format!("${:<4}={:>11}", reg_name(i), self.read(i)))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
