//! MIPS32 Primary Opcodes.
//!
//! Defines the major opcodes (bits 31-26) for the supported instruction subset.

/// Register-register instructions; the operation is selected by `funct`.
pub const OP_SPECIAL: u32 = 0x00;

/// Jump (J).
pub const OP_J: u32 = 0x02;

/// Branch on Equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Load Word (LW).
pub const OP_LW: u32 = 0x23;

/// Store Word (SW).
pub const OP_SW: u32 = 0x2B;
