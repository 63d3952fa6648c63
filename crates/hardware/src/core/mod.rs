//! Core processor implementation.
//!
//! This module contains the machine state and the execution engine: the register
//! file and run state, the load/store unit, and the CPU that dispatches decoded
//! instructions to their handlers.

/// Architecture-specific components (register file, run states).
pub mod arch;

/// CPU state and instruction execution.
pub mod cpu;

/// Execution units (load/store address generation).
pub mod units;

pub use self::cpu::Cpu;
