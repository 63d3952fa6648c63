//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the hexadecimal input parser, field extraction, the table-driven decoder,
//! and the disassembler for the supported MIPS32 subset (`add`, `syscall`, `lw`, `sw`,
//! `beq`, `j`).

/// Application Binary Interface (ABI) register names and syscall codes.
pub mod abi;

/// Table-driven instruction classification and decoding.
pub mod decode;

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// Hexadecimal instruction text parsing.
pub mod hex;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Opcode and function code definitions.
pub mod mips32;
