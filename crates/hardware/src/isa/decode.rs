//! MIPS Instruction Decoder.
//!
//! This module turns a 32-bit instruction word into a structured [`Instruction`].
//! Decoding is table driven:
//! 1. **Classification:** The primary opcode indexes a 64-entry table yielding the
//!    format and, for I/J-format, the instruction constructor.
//! 2. **Field Extraction:** Fields are masked out of their exact bit ranges and
//!    register indices are range checked.
//! 3. **Function Dispatch:** For R-format, the funct field indexes a second 64-entry
//!    table yielding the instruction constructor.

use crate::common::constants::{FIVE_BIT_MASK, SIX_BIT_MASK};
use crate::common::error::DecodeError;
use crate::isa::hex;
use crate::isa::instruction::{Format, IType, Instruction, InstructionBits, JType, RType};
use crate::isa::mips32::{funct, opcodes};

/// Number of entries in each dispatch table (6-bit selectors).
const TABLE_SIZE: usize = (SIX_BIT_MASK + 1) as usize;

/// Largest valid register index / shift amount.
const MAX_REG_FIELD: u32 = FIVE_BIT_MASK;

/// Constructor for an R-format instruction variant.
type RCtor = fn(RType) -> Instruction;
/// Constructor for an I-format instruction variant.
type ICtor = fn(IType) -> Instruction;
/// Constructor for a J-format instruction variant.
type JCtor = fn(JType) -> Instruction;

/// Entry of the primary opcode table.
#[derive(Clone, Copy)]
enum OpcodeEntry {
    /// R-format; the operation is selected through [`FUNCT_TABLE`].
    Special,
    /// I-format with its constructor.
    Immediate(ICtor),
    /// J-format with its constructor.
    Jump(JCtor),
}

impl OpcodeEntry {
    const fn format(self) -> Format {
        match self {
            Self::Special => Format::R,
            Self::Immediate(_) => Format::I,
            Self::Jump(_) => Format::J,
        }
    }
}

/// Primary opcode (bits 31-26) dispatch table.
static OPCODE_TABLE: [Option<OpcodeEntry>; TABLE_SIZE] = build_opcode_table();

/// R-format funct (bits 5-0) dispatch table.
static FUNCT_TABLE: [Option<RCtor>; TABLE_SIZE] = build_funct_table();

const fn build_opcode_table() -> [Option<OpcodeEntry>; TABLE_SIZE] {
    let mut table: [Option<OpcodeEntry>; TABLE_SIZE] = [None; TABLE_SIZE];
    table[opcodes::OP_SPECIAL as usize] = Some(OpcodeEntry::Special);
    table[opcodes::OP_J as usize] = Some(OpcodeEntry::Jump(Instruction::Jump));
    table[opcodes::OP_BEQ as usize] = Some(OpcodeEntry::Immediate(Instruction::BranchEqual));
    table[opcodes::OP_LW as usize] = Some(OpcodeEntry::Immediate(Instruction::LoadWord));
    table[opcodes::OP_SW as usize] = Some(OpcodeEntry::Immediate(Instruction::StoreWord));
    table
}

const fn build_funct_table() -> [Option<RCtor>; TABLE_SIZE] {
    let mut table: [Option<RCtor>; TABLE_SIZE] = [None; TABLE_SIZE];
    table[funct::ADD as usize] = Some(Instruction::Add);
    table[funct::SYSCALL as usize] = Some(Instruction::Syscall);
    table
}

/// Looks up the opcode table entry for a word.
fn opcode_entry(word: u32) -> Result<OpcodeEntry, DecodeError> {
    let opcode = word.opcode();
    OPCODE_TABLE
        .get(opcode as usize)
        .copied()
        .flatten()
        .ok_or(DecodeError::UnsupportedOpcode { opcode, word })
}

/// Classifies a word by its primary opcode alone.
///
/// # Returns
///
/// The instruction [`Format`], or [`DecodeError::UnsupportedOpcode`].
pub fn classify(word: u32) -> Result<Format, DecodeError> {
    opcode_entry(word).map(OpcodeEntry::format)
}

/// Decodes an instruction word into its operation and fields.
///
/// # Arguments
///
/// * `word` - The 32-bit instruction encoding.
///
/// # Returns
///
/// The decoded [`Instruction`], or the first [`DecodeError`] encountered.
pub fn decode(word: u32) -> Result<Instruction, DecodeError> {
    let inst = match opcode_entry(word)? {
        OpcodeEntry::Special => {
            let fields = decode_r_type(word)?;
            let ctor = FUNCT_TABLE
                .get(fields.funct as usize)
                .copied()
                .flatten()
                .ok_or(DecodeError::UnsupportedFunct {
                    funct: fields.funct,
                    word,
                })?;
            ctor(fields)
        }
        OpcodeEntry::Immediate(ctor) => ctor(decode_i_type(word)?),
        OpcodeEntry::Jump(ctor) => ctor(JType {
            opcode: word.opcode(),
            address: word.target(),
        }),
    };

    tracing::debug!(word = %hex::format_word(word), format = %inst.format(), "decoded");
    Ok(inst)
}

/// Parses one input line and decodes it.
///
/// # Returns
///
/// The instruction word together with its decoded form.
pub fn decode_line(line: &str) -> Result<(u32, Instruction), DecodeError> {
    let word = hex::parse_word(line)?;
    decode(word).map(|inst| (word, inst))
}

/// Decodes the fields of an R-format word.
///
/// R-Type format: `opcode | rs | rt | rd | shamt | funct`
fn decode_r_type(word: u32) -> Result<RType, DecodeError> {
    Ok(RType {
        rs: check_reg("rs", word.rs())?,
        rt: check_reg("rt", word.rt())?,
        rd: check_reg("rd", word.rd())?,
        shamt: check_field("shamt", word.shamt())?,
        funct: word.funct(),
    })
}

/// Decodes the fields of an I-format word.
///
/// I-Type format: `opcode | rs | rt | immediate`
fn decode_i_type(word: u32) -> Result<IType, DecodeError> {
    Ok(IType {
        opcode: word.opcode(),
        rs: check_reg("rs", word.rs())?,
        rt: check_reg("rt", word.rt())?,
        imm: word.imm(),
    })
}

fn check_reg(field: &'static str, idx: usize) -> Result<usize, DecodeError> {
    check_field(field, idx as u32).map(|v| v as usize)
}

fn check_field(field: &'static str, value: u32) -> Result<u32, DecodeError> {
    if value > MAX_REG_FIELD {
        return Err(DecodeError::FieldRange { field, value });
    }
    Ok(value)
}
