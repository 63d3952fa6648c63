//! Load and Store Handlers.
//!
//! `lw` moves a memory word into a register; `sw` moves a register into a memory
//! word. Both resolve `rs + offset` through the load/store unit before touching
//! any state, so the resolved index is always in range.

use super::Cpu;
use crate::common::data::AccessType;
use crate::common::error::ExecError;

impl Cpu {
    /// `lw rt, offset(rs)`: `rt = mem[(rs + offset) / 4]`.
    pub fn load_word(&mut self, rt: usize, rs: usize, offset: i32) -> Result<(), ExecError> {
        let index = self.effective_index(AccessType::Read, rs, offset)?;
        let val = self.memory.load(index);
        self.regs.write(rt, val);
        tracing::trace!(rt, index, val, "lw");
        self.advance_pc();
        Ok(())
    }

    /// `sw rt, offset(rs)`: `mem[(rs + offset) / 4] = rt`.
    pub fn store_word(&mut self, rt: usize, rs: usize, offset: i32) -> Result<(), ExecError> {
        let index = self.effective_index(AccessType::Write, rs, offset)?;
        let val = self.regs.read(rt);
        self.memory.store(index, val);
        tracing::trace!(rt, index, val, "sw");
        self.advance_pc();
        Ok(())
    }
}
