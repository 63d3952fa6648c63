//! Instruction Disassembler for the supported MIPS subset.
//!
//! Converts a decoded instruction (or a raw word) into a human-readable mnemonic
//! string for instruction tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use spemu_core::isa::disasm::disassemble_word;
//! assert_eq!(disassemble_word(0x0022_2820), "add $a1, $at, $v0");
//! ```

use crate::common::constants::WORD_SHIFT;
use crate::isa::abi::reg_name;
use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// Disassembles a decoded instruction.
///
/// Branch offsets are printed in words, as encoded; jump targets are printed as
/// the byte address formed by `address << 2`.
pub fn disassemble(inst: &Instruction) -> String {
    match inst {
        Instruction::Add(r) => format!(
            "add ${}, ${}, ${}",
            reg_name(r.rd),
            reg_name(r.rs),
            reg_name(r.rt)
        ),
        Instruction::Syscall(_) => "syscall".to_string(),
        Instruction::LoadWord(i) => {
            format!("lw ${}, {}(${})", reg_name(i.rt), i.simm(), reg_name(i.rs))
        }
        Instruction::StoreWord(i) => {
            format!("sw ${}, {}(${})", reg_name(i.rt), i.simm(), reg_name(i.rs))
        }
        Instruction::BranchEqual(i) => {
            format!("beq ${}, ${}, {}", reg_name(i.rs), reg_name(i.rt), i.simm())
        }
        Instruction::Jump(j) => format!("j {:#010x}", j.address << WORD_SHIFT),
    }
}

/// Disassembles a raw instruction word.
///
/// Returns `"unknown"` for encodings the decoder rejects.
pub fn disassemble_word(word: u32) -> String {
    decode(word).map_or_else(|_| "unknown".to_string(), |inst| disassemble(&inst))
}
