//! Session statistics collection and reporting.
//!
//! This module tracks what a session did. It provides:
//! 1. **Throughput:** Lines read and instructions retired.
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump, system).
//! 3. **Errors:** Decode and execution failures recovered at the instruction boundary.

use std::io::{self, Write};

use crate::isa::instruction::Instruction;

/// Session statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Input lines consumed as instructions.
    pub lines_read: u64,
    /// Number of instructions executed to completion.
    pub instructions_retired: u64,

    /// Count of ALU (`add`) instructions retired.
    pub inst_alu: u64,
    /// Count of `lw` instructions retired.
    pub inst_load: u64,
    /// Count of `sw` instructions retired.
    pub inst_store: u64,
    /// Count of `beq` instructions retired.
    pub inst_branch: u64,
    /// Count of `beq` instructions whose branch was taken.
    pub branches_taken: u64,
    /// Count of `j` instructions retired.
    pub inst_jump: u64,
    /// Count of `syscall` instructions retired.
    pub inst_system: u64,

    /// Lines rejected by the hex parser or the decoder.
    pub decode_errors: u64,
    /// Instructions rejected by their handler.
    pub exec_errors: u64,
}

impl SimStats {
    /// Records a retired instruction.
    ///
    /// # Arguments
    ///
    /// * `inst` - The instruction that completed.
    /// * `taken` - Whether a branch was taken (ignored for non-branches).
    pub fn record_retired(&mut self, inst: &Instruction, taken: bool) {
        self.instructions_retired += 1;
        match inst {
            Instruction::Add(_) => self.inst_alu += 1,
            Instruction::LoadWord(_) => self.inst_load += 1,
            Instruction::StoreWord(_) => self.inst_store += 1,
            Instruction::BranchEqual(_) => {
                self.inst_branch += 1;
                if taken {
                    self.branches_taken += 1;
                }
            }
            Instruction::Jump(_) => self.inst_jump += 1,
            Instruction::Syscall(_) => self.inst_system += 1,
        }
    }

    /// Writes all statistics sections.
    pub fn print(&self, out: &mut impl Write) -> io::Result<()> {
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;

        writeln!(out, "==========================================================")?;
        writeln!(out, "MIPS EMULATION STATISTICS")?;
        writeln!(out, "==========================================================")?;
        writeln!(out, "sim_lines                {}", self.lines_read)?;
        writeln!(out, "sim_insts                {}", self.instructions_retired)?;
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "INSTRUCTION MIX")?;
        for (name, count) in [
            ("op.alu", self.inst_alu),
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.branch", self.inst_branch),
            ("op.jump", self.inst_jump),
            ("op.system", self.inst_system),
        ] {
            writeln!(out, "  {name:<22} {count} ({:.2}%)", pct(count))?;
        }
        writeln!(out, "  branch.taken           {}", self.branches_taken)?;
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "ERRORS")?;
        writeln!(out, "  err.decode             {}", self.decode_errors)?;
        writeln!(out, "  err.exec               {}", self.exec_errors)?;
        writeln!(out, "==========================================================")?;
        Ok(())
    }
}
