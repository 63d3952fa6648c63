//! Common utilities and types used throughout the MIPS emulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the emulator. It includes:
//! 1. **Constants:** Machine-wide constants for registers, memory, and instruction fields.
//! 2. **Memory Access:** Definitions for categorizing memory operations (Read/Write).
//! 3. **Error Handling:** Decode, execution, and configuration error types.

/// Common constants used throughout the emulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types for decoding, execution, and configuration.
pub mod error;

pub use data::AccessType;
pub use error::{ConfigError, DecodeError, ExecError, HexError, SimError};
