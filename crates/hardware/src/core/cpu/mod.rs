//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which is the complete machine
//! state of an emulation session. It coordinates the following:
//! 1. **State Management:** Maintains registers, program counter, and run state.
//! 2. **Memory:** Owns the word-addressable data memory.
//! 3. **Execution:** Dispatches decoded instructions to their handlers (see `execution`).

/// Instruction dispatch and the arithmetic/control-flow handlers.
pub mod execution;

/// Load and store handlers.
pub mod memory;

/// Syscall handler.
pub mod syscall;

use std::io::{self, Write};

use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::arch::mode::RunState;
use crate::soc::Memory;

/// Main CPU structure containing all machine state.
///
/// One instance exists per session. Handlers take it by `&mut`, so every
/// mutation (including branch targets and halting) is visible to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Data memory.
    pub memory: Memory,
    /// Program Counter.
    pub pc: u32,
    /// Current run state.
    pub state: RunState,
}

impl Cpu {
    /// Creates a new CPU initialized according to the configuration.
    ///
    /// Registers start at zero; memory is sized and preloaded from `config.memory`.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: Gpr::new(),
            memory: Memory::with_contents(config.memory.words, &config.memory.preload),
            pc: config.general.start_pc,
            state: RunState::Running,
        }
    }

    /// Returns `true` once the exit syscall has run.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Writes the program counter, run state, registers, and non-zero memory words.
    pub fn dump_state(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "pc = {:#010x}  state = {}", self.pc, self.state)?;
        self.regs.dump(out)?;
        self.memory.dump(out)
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
