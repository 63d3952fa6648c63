//! MIPS O32 Application Binary Interface (ABI) register names and syscall codes.
//!
//! Defines the conventional register names and the register indices and service
//! codes used by the `syscall` instruction.

/// Register $0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register $2 (first return value, v0; selects the syscall service).
pub const REG_V0: usize = 2;
/// Register $4 (first argument, a0; syscall argument).
pub const REG_A0: usize = 4;
/// Register $29 (stack pointer, sp).
pub const REG_SP: usize = 29;
/// Register $31 (return address, ra).
pub const REG_RA: usize = 31;

/// Syscall service: print the integer in `$a0`.
pub const SYS_PRINT_INT: i32 = 1;
/// Syscall service: print the NUL-terminated string at byte address `$a0`.
pub const SYS_PRINT_STRING: i32 = 4;
/// Syscall service: read an integer into `$v0`.
pub const SYS_READ_INT: i32 = 5;
/// Syscall service: halt the machine.
pub const SYS_EXIT: i32 = 10;

/// ABI register names for $0–$31.
const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the ABI name (without the `$` sigil) for a register index.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}
