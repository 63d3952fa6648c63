//! MIPS32 Base Integer Instruction Subset.
//!
//! Defines the opcode and function-code values recognised by the decoder.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 31-26) selecting the instruction format.
//! - `funct`: Secondary function codes (bits 5-0) for `SPECIAL` (R-format) instructions.

/// Function code definitions for R-format instructions.
pub mod funct;

/// Primary opcode definitions.
pub mod opcodes;
