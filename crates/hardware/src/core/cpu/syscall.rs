//! Syscall Handler.
//!
//! Services are selected by `$v0` and take their argument from `$a0`:
//!
//! | `$v0` | Service |
//! |---|---|
//! | 1  | print the integer in `$a0` |
//! | 4  | print the NUL-terminated string at byte address `$a0` |
//! | 5  | read a decimal integer line into `$v0` |
//! | 10 | halt |
//!
//! Any other code is rejected with [`ExecError::UnsupportedSyscall`].

use super::Cpu;
use crate::common::data::AccessType;
use crate::common::error::ExecError;
use crate::core::arch::mode::RunState;
use crate::isa::abi;
use crate::soc::Console;

impl Cpu {
    /// Performs the service selected by `$v0`.
    pub fn syscall(&mut self, console: &mut dyn Console) -> Result<(), ExecError> {
        let code = self.regs.read(abi::REG_V0);
        let arg = self.regs.read(abi::REG_A0);
        tracing::trace!(code, arg, "syscall");

        match code {
            abi::SYS_PRINT_INT => console.write_line(&arg.to_string())?,
            abi::SYS_PRINT_STRING => {
                let text = self.read_string(arg)?;
                console.write_line(&text)?;
            }
            abi::SYS_READ_INT => {
                let line = console.read_line()?.ok_or(ExecError::EndOfInput)?;
                let val = line
                    .trim()
                    .parse::<i32>()
                    .map_err(|_| ExecError::InvalidSyscallInput { input: line.clone() })?;
                self.regs.write(abi::REG_V0, val);
            }
            abi::SYS_EXIT => {
                self.state = RunState::Halted;
                tracing::info!(pc = self.pc, "halted by exit syscall");
            }
            _ => return Err(ExecError::UnsupportedSyscall { code }),
        }

        self.advance_pc();
        Ok(())
    }

    /// Collects the NUL-terminated string starting at byte address `addr`.
    ///
    /// Fails with [`ExecError::OutOfBounds`] if the start lies outside memory or no
    /// terminator is found before the end of memory.
    fn read_string(&self, addr: i32) -> Result<String, ExecError> {
        let out_of_bounds = |address: i64| ExecError::OutOfBounds {
            access: AccessType::StringRead,
            address,
            words: self.memory.len(),
        };

        let start = usize::try_from(addr).map_err(|_| out_of_bounds(i64::from(addr)))?;
        let mut bytes = Vec::new();
        for address in start..self.memory.len_bytes() {
            match self.memory.read_byte(address) {
                Some(0) => return Ok(String::from_utf8_lossy(&bytes).into_owned()),
                Some(byte) => bytes.push(byte),
                None => break,
            }
        }
        Err(out_of_bounds(start.max(self.memory.len_bytes()) as i64))
    }
}
