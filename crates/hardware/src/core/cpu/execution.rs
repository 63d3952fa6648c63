//! Instruction Execution.
//!
//! This module implements the execute step of the engine. It performs the following:
//! 1. **Dispatch:** Matches the decoded instruction variant to its handler.
//! 2. **Arithmetic:** `add` with wrapping 32-bit semantics.
//! 3. **Control Flow:** `beq` and `j` program counter updates.
//! 4. **Bookkeeping:** PC advance.
//!
//! Handlers validate before mutating; an `Err` leaves the CPU untouched.

use super::Cpu;
use crate::common::constants::{JUMP_REGION_MASK, WORD_BYTES, WORD_SHIFT};
use crate::common::data::AccessType;
use crate::common::error::ExecError;
use crate::core::arch::mode::RunState;
use crate::core::units::lsu::Lsu;
use crate::isa::instruction::Instruction;
use crate::soc::Console;

impl Cpu {
    /// Executes one decoded instruction.
    ///
    /// # Arguments
    ///
    /// * `inst` - The decoded instruction.
    /// * `console` - Operator console used by `syscall`.
    ///
    /// # Returns
    ///
    /// `Ok(taken)` once the instruction has retired, where `taken` is set only
    /// for a `beq` whose branch was taken, or the [`ExecError`] that rejected it.
    /// A halted CPU rejects every instruction with [`ExecError::Halted`].
    pub fn execute(
        &mut self,
        inst: &Instruction,
        console: &mut dyn Console,
    ) -> Result<bool, ExecError> {
        if self.state == RunState::Halted {
            return Err(ExecError::Halted);
        }

        let taken = match *inst {
            Instruction::Add(r) => {
                self.add(r.rd, r.rs, r.rt);
                false
            }
            Instruction::Syscall(_) => {
                self.syscall(console)?;
                false
            }
            Instruction::LoadWord(i) => {
                self.load_word(i.rt, i.rs, i.simm())?;
                false
            }
            Instruction::StoreWord(i) => {
                self.store_word(i.rt, i.rs, i.simm())?;
                false
            }
            Instruction::BranchEqual(i) => self.branch_equal(i.rs, i.rt, i.simm()),
            Instruction::Jump(j) => {
                self.jump(j.address);
                false
            }
        };

        Ok(taken)
    }

    /// `add rd, rs, rt`: `rd = rs + rt`, wrapping on overflow.
    pub fn add(&mut self, rd: usize, rs: usize, rt: usize) {
        let sum = self.regs.read(rs).wrapping_add(self.regs.read(rt));
        self.regs.write(rd, sum);
        tracing::trace!(rd, sum, "add");
        self.advance_pc();
    }

    /// `beq rs, rt, offset`: branches to `PC + 4 + offset * 4` when `rs == rt`.
    ///
    /// # Returns
    ///
    /// Whether the branch was taken.
    pub fn branch_equal(&mut self, rs: usize, rt: usize, offset: i32) -> bool {
        let taken = self.regs.read(rs) == self.regs.read(rt);
        let next = self.pc.wrapping_add(WORD_BYTES);
        self.pc = if taken {
            next.wrapping_add((offset as u32) << WORD_SHIFT)
        } else {
            next
        };
        tracing::trace!(taken, pc = self.pc, "beq");
        taken
    }

    /// `j address`: keeps the upper four bits of `PC + 4` and replaces the rest
    /// with `address << 2`.
    pub fn jump(&mut self, address: u32) {
        let region = self.pc.wrapping_add(WORD_BYTES) & JUMP_REGION_MASK;
        self.pc = region | (address << WORD_SHIFT);
        tracing::trace!(pc = self.pc, "j");
    }

    /// Moves the PC to the next sequential instruction.
    pub(crate) fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(WORD_BYTES);
    }

    /// Resolves a word access through the load/store unit against this CPU's memory.
    pub(crate) fn effective_index(
        &self,
        access: AccessType,
        rs: usize,
        offset: i32,
    ) -> Result<usize, ExecError> {
        Lsu::word_index(access, self.regs.read(rs), offset, self.memory.len())
    }
}
