//! Decode and Execution Error definitions.
//!
//! This module defines the error taxonomy of the emulator. It provides:
//! 1. **Input Errors:** Malformed hexadecimal instruction text.
//! 2. **Decode Errors:** Unsupported opcodes/functs and field range violations.
//! 3. **Execution Errors:** Alignment and bounds faults, syscall failures, and I/O failures.
//! 4. **Configuration Errors:** Invalid or unreadable JSON configuration.
//!
//! Every variant except [`ExecError::Io`] is recoverable at the per-instruction boundary.

use std::io;

use thiserror::Error;

use super::data::AccessType;

/// Failure to read one line of text as an 8-digit hexadecimal word.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HexError {
    /// The line does not contain exactly eight characters.
    #[error("expected 8 hexadecimal digits, got {len} characters")]
    WrongLength {
        /// Number of characters found after stripping the line terminator.
        len: usize,
    },

    /// A character outside `[0-9A-Fa-f]` was found.
    #[error("invalid hexadecimal digit {ch:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        ch: char,
        /// Zero-based character position within the line.
        position: usize,
    },
}

/// Failure to turn an instruction line into an [`Instruction`](crate::isa::instruction::Instruction).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The line is not a well-formed 8-digit hexadecimal word.
    #[error("malformed instruction: {0}")]
    MalformedHex(#[from] HexError),

    /// The primary opcode (bits 31-26) has no implemented format.
    #[error("unsupported opcode: {opcode:#04x} in {word:#010x}")]
    UnsupportedOpcode {
        /// The 6-bit opcode.
        opcode: u32,
        /// The full instruction word.
        word: u32,
    },

    /// The R-format funct field (bits 5-0) has no implemented operation.
    #[error("unsupported funct: {funct:#04x} in {word:#010x}")]
    UnsupportedFunct {
        /// The 6-bit funct code.
        funct: u32,
        /// The full instruction word.
        word: u32,
    },

    /// An extracted field lies outside its architectural range.
    #[error("{field} out of range: {value}")]
    FieldRange {
        /// Field name (`rs`, `rt`, `rd`, `shamt`).
        field: &'static str,
        /// The extracted value.
        value: u32,
    },
}

/// Failure while executing a decoded instruction.
///
/// Handlers validate completely before mutating, so a returned error means the
/// machine state is exactly as it was before the instruction.
#[derive(Debug, Error)]
pub enum ExecError {
    /// A word access used an offset or address that is not a multiple of four.
    #[error("{access} misaligned: {what} {value} is not a multiple of 4")]
    Misaligned {
        /// Instruction class performing the access.
        access: AccessType,
        /// Which quantity was misaligned (`immediate` or `address`).
        what: &'static str,
        /// The misaligned value.
        value: i64,
    },

    /// A memory access fell outside the allocated words.
    #[error("{access} out of bounds: address {address} outside {words} words of memory")]
    OutOfBounds {
        /// Instruction class performing the access.
        access: AccessType,
        /// The byte address that was rejected.
        address: i64,
        /// Memory extent in words.
        words: usize,
    },

    /// `syscall` was executed with an unknown service code in `$v0`.
    #[error("unsupported syscall: code {code}")]
    UnsupportedSyscall {
        /// The value of `$v0`.
        code: i32,
    },

    /// The read-integer syscall received text that is not a decimal `i32`.
    #[error("invalid integer input for read syscall: {input:?}")]
    InvalidSyscallInput {
        /// The rejected line, terminator stripped.
        input: String,
    },

    /// The read-integer syscall found the input stream exhausted.
    #[error("end of input while reading integer for read syscall")]
    EndOfInput,

    /// An instruction was submitted after the machine halted.
    #[error("machine is halted")]
    Halted,

    /// The console could not be read or written.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Any error raised while processing one instruction line.
#[derive(Debug, Error)]
pub enum SimError {
    /// The line could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// The decoded instruction could not be executed.
    #[error(transparent)]
    Exec(#[from] ExecError),
}

impl SimError {
    /// Returns `true` when the session cannot continue (unrecoverable I/O).
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Exec(ExecError::Io(_)))
    }
}

impl From<io::Error> for SimError {
    fn from(err: io::Error) -> Self {
        Self::Exec(ExecError::Io(err))
    }
}

/// Failure to load or validate a [`Config`](crate::config::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] io::Error),

    /// The JSON text could not be deserialized.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field holds a value outside its accepted range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
