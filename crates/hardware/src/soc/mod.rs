//! System Components.
//!
//! This module organizes the components attached to the emulated core: the
//! word-addressable data memory and the operator console. Instructions are
//! supplied through the console rather than fetched from memory.

/// Stream-backed console implementation.
pub mod console;

/// Word-addressable data memory.
pub mod memory;

/// Console trait definition.
pub mod traits;

pub use console::StreamConsole;
pub use memory::Memory;
pub use traits::Console;
