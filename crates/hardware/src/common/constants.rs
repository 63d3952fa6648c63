//! Global System Constants.
//!
//! This module defines system-wide constants used across the emulator. It includes:
//! 1. **Machine Constants:** Register count, word size, and default memory extent.
//! 2. **Instruction Constants:** Field masks and shifts for the three MIPS formats.
//! 3. **Control Flow Constants:** The jump-region mask applied by `j`.

/// Number of general-purpose integer registers.
pub const NUM_REGS: usize = 32;

/// Size of a machine word (and of every instruction) in bytes.
pub const WORD_BYTES: u32 = 4;

/// Default memory extent in words.
pub const DEFAULT_MEMORY_WORDS: usize = 32;

/// Largest memory extent accepted by the configuration, in words.
pub const MAX_MEMORY_WORDS: usize = 1024;

/// Number of hexadecimal digits in one encoded instruction.
pub const HEX_DIGITS: usize = 8;

/// Bit position shift for the opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;

/// Bit mask for the 6-bit opcode and funct fields.
pub const SIX_BIT_MASK: u32 = 0x3F;

/// Bit mask for the 5-bit register and shift-amount fields.
pub const FIVE_BIT_MASK: u32 = 0x1F;

/// Bit position shift for the rs field (bits 25-21).
pub const RS_SHIFT: u32 = 21;

/// Bit position shift for the rt field (bits 20-16).
pub const RT_SHIFT: u32 = 16;

/// Bit position shift for the rd field (bits 15-11).
pub const RD_SHIFT: u32 = 11;

/// Bit position shift for the shamt field (bits 10-6).
pub const SHAMT_SHIFT: u32 = 6;

/// Bit mask for the 16-bit immediate field (bits 15-0).
pub const IMM_MASK: u32 = 0xFFFF;

/// Bit mask for the 26-bit jump target field (bits 25-0).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Shift converting a word offset into a byte offset.
pub const WORD_SHIFT: u32 = 2;

/// Upper PC bits retained by `j` (the 256 MiB jump region).
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;
