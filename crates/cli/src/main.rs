//! Spemulator command-line driver.
//!
//! Reads one MIPS instruction per line from stdin as 8 hexadecimal digits and
//! executes it, until the exit syscall or end of input. It performs:
//! 1. **Logging:** Installs a stderr `tracing` subscriber at `warn` level.
//! 2. **Session:** Runs the emulator with the default configuration over stdin/stdout.
//! 3. **Exit status:** Zero on halt or end of input, one on an unrecoverable I/O error.

use std::io;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use spemu_core::config::Config;
use spemu_core::sim::{Simulator, StopReason};

#[derive(Parser, Debug)]
#[command(
    name = "spemu",
    author,
    version,
    about = "Single-instruction MIPS emulator",
    long_about = "Reads MIPS machine code from stdin, one 8-digit hexadecimal instruction per line, and executes it.\n\nSupported: add, syscall, lw, sw, beq, j.\nSyscalls ($v0): 1 print int, 4 print string, 5 read int, 10 exit.\nRegisters and memory start at zero; load $v0 with lw before a syscall.\n\nExample (add $a1, $at, $v0; lw $t0, 4($zero)):\n  printf '00222820\\n8c080004\\n' | spemu"
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(io::stderr)
        .init();

    let config = Config::default();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut sim = Simulator::with_streams(&config, stdin.lock(), stdout.lock());

    match sim.run() {
        Ok(summary) => {
            if summary.reason == StopReason::EndOfInput {
                tracing::debug!("input exhausted before exit syscall");
            }
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            process::exit(1);
        }
    }
}
