//! Simulator: owns the CPU, the operator console, and the session statistics.
//!
//! Each input line goes through the same cycle: parse hex, decode, print the
//! format diagnostic, execute. Errors are reported on the console and the loop
//! moves on to the next line; only console I/O failures end the session early.

use std::io::{BufRead, Write};

use crate::common::error::{ExecError, SimError};
use crate::config::Config;
use crate::core::Cpu;
use crate::isa::decode::decode_line;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::Instruction;
use crate::soc::{Console, StreamConsole};
use crate::stats::SimStats;

/// Welcome banner printed at session start.
pub const BANNER: &str = "Welcome to Spemulator: The MIPS emulator!";

/// Prompt printed after the banner.
pub const PROMPT: &str = "Please input a MIPS instruction in hexadecimal:";

/// Why a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The exit syscall halted the machine.
    Halted,
    /// The input stream was exhausted.
    EndOfInput,
}

/// Outcome of [`Simulator::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Why the session ended.
    pub reason: StopReason,
    /// Statistics gathered during the session.
    pub stats: SimStats,
}

/// Top-level simulator: CPU machine state + console.
///
/// Statistics live beside the CPU so that a rejected line never alters machine state.
#[derive(Debug)]
pub struct Simulator<C> {
    cpu: Cpu,
    console: C,
    stats: SimStats,
    trace: bool,
    show_banner: bool,
}

impl<R: BufRead, W: Write> Simulator<StreamConsole<R, W>> {
    /// Creates a simulator reading from `input` and writing to `output`.
    pub fn with_streams(config: &Config, input: R, output: W) -> Self {
        Self::new(config, StreamConsole::new(input, output))
    }
}

impl<C: Console> Simulator<C> {
    /// Creates a simulator with the given configuration and console.
    pub fn new(config: &Config, console: C) -> Self {
        Self {
            cpu: Cpu::new(config),
            console,
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
            show_banner: config.general.show_banner,
        }
    }

    /// Returns the machine state.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Returns the machine state mutably.
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    /// Returns the statistics gathered so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Returns the console.
    pub const fn console(&self) -> &C {
        &self.console
    }

    /// Consumes the simulator, returning the CPU and the console.
    pub fn into_parts(self) -> (Cpu, C) {
        (self.cpu, self.console)
    }

    /// Processes one instruction line: decode, print diagnostics, execute.
    ///
    /// On error the CPU is left untouched; only the session counters move.
    ///
    /// # Returns
    ///
    /// The executed instruction, or the [`SimError`] that rejected the line.
    pub fn step_line(&mut self, line: &str) -> Result<Instruction, SimError> {
        self.stats.lines_read += 1;

        let (_, inst) = decode_line(line).inspect_err(|_| self.stats.decode_errors += 1)?;

        self.console.write_line(&inst.format().to_string())?;
        if let Some(fields) = inst.r_fields() {
            self.console.write_line(&fields.summary())?;
        }

        let pc = self.cpu.pc;
        match self.cpu.execute(&inst, &mut self.console) {
            Ok(taken) => self.stats.record_retired(&inst, taken),
            Err(err) => {
                if !matches!(err, ExecError::Io(_)) {
                    self.stats.exec_errors += 1;
                }
                return Err(err.into());
            }
        }

        if self.trace {
            self.console
                .write_line(&format!("[trace] pc={pc:#010x} {}", disassemble(&inst)))?;
        }
        Ok(inst)
    }

    /// Runs until the machine halts or the input is exhausted.
    ///
    /// # Returns
    ///
    /// A [`RunSummary`], or the fatal [`SimError`] (console I/O failure) that
    /// ended the session.
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        if self.show_banner {
            self.console.write_line(BANNER)?;
            self.console.write_line(PROMPT)?;
        }

        let reason = loop {
            if self.cpu.is_halted() {
                break StopReason::Halted;
            }
            let Some(line) = self.console.read_line()? else {
                break StopReason::EndOfInput;
            };
            match self.step_line(&line) {
                Ok(_) => {}
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => self.report(&err)?,
            }
        };

        tracing::info!(?reason, retired = self.stats.instructions_retired, "session ended");

        if self.trace {
            self.print_summary()?;
        }

        Ok(RunSummary {
            reason,
            stats: self.stats.clone(),
        })
    }

    /// Reports a recovered error on the console and in the log.
    fn report(&mut self, err: &SimError) -> Result<(), SimError> {
        tracing::warn!(error = %err, pc = self.cpu.pc, "instruction rejected");
        self.console.write_line(&format!("error: {err}"))?;
        Ok(())
    }

    /// Writes the final machine state and statistics to the console.
    fn print_summary(&mut self) -> Result<(), SimError> {
        let mut buf = Vec::new();
        self.cpu.dump_state(&mut buf)?;
        self.stats.print(&mut buf)?;
        let text = String::from_utf8_lossy(&buf);
        for line in text.lines() {
            self.console.write_line(line)?;
        }
        Ok(())
    }
}
