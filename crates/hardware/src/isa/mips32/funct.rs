//! MIPS32 `SPECIAL` Function Codes.
//!
//! The `funct` field (bits 5-0) distinguishes between R-format instructions
//! sharing opcode `0x00`.

/// System call.
pub const SYSCALL: u32 = 0x0C;

/// Add (no overflow trap in this emulator).
pub const ADD: u32 = 0x20;
