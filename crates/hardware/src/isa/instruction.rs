//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions for the three MIPS instruction formats and the
//! decoded [`Instruction`] representation consumed by the execution engine.
//!
//! ```text
//! R-type: [opcode:6][rs:5][rt:5][rd:5][shamt:5][funct:6]
//! I-type: [opcode:6][rs:5][rt:5][immediate:16]
//! J-type: [opcode:6][address:26]
//! ```

use std::fmt;

use crate::common::constants::{
    FIVE_BIT_MASK, IMM_MASK, OPCODE_SHIFT, RD_SHIFT, RS_SHIFT, RT_SHIFT, SHAMT_SHIFT,
    SIX_BIT_MASK, TARGET_MASK,
};
use crate::isa::mips32::opcodes;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every accessor masks after shifting, so each field covers exactly its own bit range.
pub trait InstructionBits {
    /// Extracts the primary opcode (bits 31-26).
    fn opcode(&self) -> u32;

    /// Extracts the first source register field (bits 25-21).
    fn rs(&self) -> usize;

    /// Extracts the second source / target register field (bits 20-16).
    fn rt(&self) -> usize;

    /// Extracts the destination register field (bits 15-11).
    fn rd(&self) -> usize;

    /// Extracts the shift amount field (bits 10-6).
    fn shamt(&self) -> u32;

    /// Extracts the R-format function code (bits 5-0).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 15-0).
    fn imm(&self) -> u16;

    /// Extracts the 26-bit jump target (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & SIX_BIT_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & FIVE_BIT_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & FIVE_BIT_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & FIVE_BIT_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> SHAMT_SHIFT) & FIVE_BIT_MASK
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & SIX_BIT_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Instruction encoding format, selected by the primary opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register-register.
    R,
    /// Register-immediate.
    I,
    /// Jump.
    J,
}

impl fmt::Display for Format {
    /// Formats the format tag as the lower-case letter printed per instruction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::R => "r",
            Self::I => "i",
            Self::J => "j",
        };
        f.write_str(tag)
    }
}

/// Fields of an R-format instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RType {
    /// First source register.
    pub rs: usize,
    /// Second source register.
    pub rt: usize,
    /// Destination register.
    pub rd: usize,
    /// Shift amount.
    pub shamt: u32,
    /// Function code.
    pub funct: u32,
}

impl RType {
    /// Field summary printed after the format tag, e.g. `shamt: 0, rd: 5, rt: 2, rs: 1`.
    pub fn summary(&self) -> String {
        format!(
            "shamt: {}, rd: {}, rt: {}, rs: {}",
            self.shamt, self.rd, self.rt, self.rs
        )
    }
}

/// Fields of an I-format instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IType {
    /// Primary opcode.
    pub opcode: u32,
    /// Base / first source register.
    pub rs: usize,
    /// Target / second source register.
    pub rt: usize,
    /// Raw 16-bit immediate.
    pub imm: u16,
}

impl IType {
    /// Returns the immediate sign-extended to 32 bits.
    #[inline]
    pub const fn simm(&self) -> i32 {
        self.imm as i16 as i32
    }
}

/// Fields of a J-format instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JType {
    /// Primary opcode.
    pub opcode: u32,
    /// 26-bit word-index target.
    pub address: u32,
}

/// A decoded instruction: the variant names the operation, the payload its fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// `add rd, rs, rt`
    Add(RType),
    /// `syscall`
    Syscall(RType),
    /// `lw rt, imm(rs)`
    LoadWord(IType),
    /// `sw rt, imm(rs)`
    StoreWord(IType),
    /// `beq rs, rt, imm`
    BranchEqual(IType),
    /// `j address`
    Jump(JType),
}

impl Instruction {
    /// Returns the encoding format.
    pub const fn format(&self) -> Format {
        match self {
            Self::Add(_) | Self::Syscall(_) => Format::R,
            Self::LoadWord(_) | Self::StoreWord(_) | Self::BranchEqual(_) => Format::I,
            Self::Jump(_) => Format::J,
        }
    }

    /// Returns the primary opcode.
    pub const fn opcode(&self) -> u32 {
        match self {
            Self::Add(_) | Self::Syscall(_) => opcodes::OP_SPECIAL,
            Self::LoadWord(i) | Self::StoreWord(i) | Self::BranchEqual(i) => i.opcode,
            Self::Jump(j) => j.opcode,
        }
    }

    /// Returns the R-format fields, if this is an R-format instruction.
    pub const fn r_fields(&self) -> Option<&RType> {
        match self {
            Self::Add(r) | Self::Syscall(r) => Some(r),
            _ => None,
        }
    }

    /// Re-encodes the instruction into its 32-bit word.
    pub const fn raw(&self) -> u32 {
        let opcode = self.opcode() << OPCODE_SHIFT;
        match self {
            Self::Add(r) | Self::Syscall(r) => {
                opcode
                    | (r.rs as u32) << RS_SHIFT
                    | (r.rt as u32) << RT_SHIFT
                    | (r.rd as u32) << RD_SHIFT
                    | r.shamt << SHAMT_SHIFT
                    | r.funct
            }
            Self::LoadWord(i) | Self::StoreWord(i) | Self::BranchEqual(i) => {
                opcode | (i.rs as u32) << RS_SHIFT | (i.rt as u32) << RT_SHIFT | i.imm as u32
            }
            Self::Jump(j) => opcode | j.address,
        }
    }
}
