//! Single-instruction MIPS emulator library.
//!
//! This crate decodes MIPS32 instructions supplied one at a time as 8 hexadecimal
//! digits and executes them against an in-memory machine:
//! 1. **ISA:** Hex parsing, field extraction, table-driven decoding, disassembly.
//! 2. **Core:** Register file, run state, load/store unit, and instruction handlers.
//! 3. **SoC:** Word-addressable data memory and the operator console.
//! 4. **Simulation:** Session loop, configuration, and statistics.
//!
//! ```
//! use spemu_core::{Config, Simulator};
//!
//! let mut sim = Simulator::with_streams(&Config::default(), std::io::empty(), Vec::new());
//! let inst = sim.step_line("00222820").unwrap();
//! assert_eq!(spemu_core::isa::disasm::disassemble(&inst), "add $a1, $at, $v0");
//! ```

/// Common types and constants (access types, errors, field masks).
pub mod common;
/// Emulator configuration (defaults and JSON loading).
pub mod config;
/// CPU core (register file, run state, load/store unit, execution).
pub mod core;
/// Instruction set (hex parsing, decode, instruction fields, ABI, disassembly).
pub mod isa;
/// Session loop.
pub mod sim;
/// Memory and console.
pub mod soc;
/// Session statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Machine state; holds registers, memory, PC, and run state.
pub use crate::core::Cpu;
/// Session driver; construct with `Simulator::with_streams`.
pub use crate::sim::Simulator;
