//! # Session Tests
//!
//! Whole sessions over scripted input, asserting the exact console transcript.

use crate::common::builder::instruction::{add, hex, j, lw, sw, syscall};
use crate::common::harness::{TestContext, quiet_config};
use pretty_assertions::assert_eq;
use spemu_core::common::error::{ExecError, SimError};
use spemu_core::config::Config;
use spemu_core::sim::StopReason;
use spemu_core::sim::simulator::{BANNER, PROMPT};

fn script(lines: &[String]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}

#[test]
fn banner_and_prompt_open_the_session() {
    let mut ctx = TestContext::with_config(&Config::default(), "");
    let summary = ctx.run();
    assert_eq!(ctx.output_lines(), vec![BANNER, PROMPT]);
    assert_eq!(summary.reason, StopReason::EndOfInput);
    assert_eq!(summary.stats.lines_read, 0);
}

#[test]
fn print_and_exit_program() {
    let mut config = quiet_config();
    config.memory.preload = vec![1, 42, 10];
    let input = script(&[
        hex(lw(2, 0, 0)),
        hex(lw(4, 4, 0)),
        hex(syscall()),
        hex(lw(2, 8, 0)),
        hex(syscall()),
        "ZZZZZZZZ".to_string(),
    ]);
    let mut ctx = TestContext::with_config(&config, &input);
    let summary = ctx.run();

    assert_eq!(
        ctx.output_lines(),
        vec![
            "i",
            "i",
            "r",
            "shamt: 0, rd: 0, rt: 0, rs: 0",
            "42",
            "i",
            "r",
            "shamt: 0, rd: 0, rt: 0, rs: 0",
        ]
    );
    assert_eq!(summary.reason, StopReason::Halted);
    assert_eq!(summary.stats.lines_read, 5);
    assert_eq!(summary.stats.instructions_retired, 5);
    assert_eq!(ctx.cpu().pc, 20);
}

#[test]
fn halt_stops_reading_input() {
    let mut config = quiet_config();
    config.memory.preload = vec![10];
    let input = script(&[hex(lw(2, 0, 0)), hex(syscall()), hex(add(1, 0, 0))]);
    let mut ctx = TestContext::with_config(&config, &input);
    let _ = ctx.run();

    let (_, console) = ctx.sim.into_parts();
    let (cursor, _) = console.into_inner();
    assert!((cursor.position() as usize) < cursor.get_ref().len());
}

#[test]
fn malformed_line_is_reported_and_skipped() {
    let mut ctx = TestContext::with_input("ZZZZZZZZ\n00222820\n");
    let before = ctx.cpu().regs.clone();
    let summary = ctx.run();

    assert_eq!(
        ctx.output_lines(),
        vec![
            "error: malformed instruction: invalid hexadecimal digit 'Z' at position 0",
            "r",
            "shamt: 0, rd: 5, rt: 2, rs: 1",
        ]
    );
    assert_eq!(ctx.cpu().regs, before);
    assert_eq!(ctx.cpu().pc, 4);
    assert_eq!(summary.stats.decode_errors, 1);
    assert_eq!(summary.stats.lines_read, 2);
}

#[test]
fn rejected_lines_leave_machine_state_untouched() {
    let mut ctx = TestContext::new().with_reg(1, 1);
    let before = ctx.cpu().clone();

    assert!(ctx.sim.step_line("ZZZZZZZZ").is_err());
    assert_eq!(*ctx.cpu(), before);

    assert!(ctx.step(sw(1, 128, 0)).is_err());
    assert_eq!(*ctx.cpu(), before);

    assert!(ctx.step(lw(2, 2, 0)).is_err());
    assert_eq!(*ctx.cpu(), before);

    assert_eq!(ctx.stats().lines_read, 3);
    assert_eq!(ctx.stats().decode_errors, 1);
    assert_eq!(ctx.stats().exec_errors, 2);
}

#[test]
fn add_then_load_runs_without_errors() {
    let mut ctx = TestContext::with_config(&Config::default(), "00222820\n8c080004\n");
    let summary = ctx.run();
    assert_eq!(
        ctx.output_lines(),
        vec![BANNER, PROMPT, "r", "shamt: 0, rd: 5, rt: 2, rs: 1", "i"]
    );
    assert_eq!(summary.stats.instructions_retired, 2);
    assert_eq!(summary.stats.exec_errors + summary.stats.decode_errors, 0);
}

#[test]
fn wrong_length_line_is_reported() {
    let mut ctx = TestContext::with_input("0022282\n\n");
    let _ = ctx.run();
    assert_eq!(
        ctx.output_lines(),
        vec![
            "error: malformed instruction: expected 8 hexadecimal digits, got 7 characters",
            "error: malformed instruction: expected 8 hexadecimal digits, got 0 characters",
        ]
    );
    assert_eq!(ctx.cpu().pc, 0);
}

#[test]
fn unsupported_opcode_is_reported_without_format_tag() {
    let mut ctx = TestContext::with_input("20000000\n");
    let _ = ctx.run();
    assert_eq!(
        ctx.output_lines(),
        vec!["error: unsupported opcode: 0x08 in 0x20000000"]
    );
}

#[test]
fn execution_error_follows_format_tag() {
    let input = script(&[hex(lw(8, 2, 0))]);
    let mut ctx = TestContext::with_input(&input);
    let summary = ctx.run();
    assert_eq!(
        ctx.output_lines(),
        vec!["i", "error: load misaligned: immediate 2 is not a multiple of 4"]
    );
    assert_eq!(summary.stats.exec_errors, 1);
    assert_eq!(summary.stats.instructions_retired, 0);
}

#[test]
fn read_syscall_consumes_next_line() {
    let mut config = quiet_config();
    config.memory.preload = vec![5];
    let input = script(&[
        hex(lw(2, 0, 0)),
        hex(syscall()),
        "123".to_string(),
        hex(add(4, 2, 0)),
    ]);
    let mut ctx = TestContext::with_config(&config, &input);
    let summary = ctx.run();

    assert_eq!(ctx.reg(2), 123);
    assert_eq!(ctx.reg(4), 123);
    assert_eq!(summary.stats.lines_read, 3);
    assert_eq!(summary.reason, StopReason::EndOfInput);
}

#[test]
fn step_after_halt_is_rejected() {
    let mut ctx = TestContext::new().with_reg(2, 10);
    ctx.run_words(&[syscall()]);
    let halted = ctx.cpu().clone();
    let err = ctx.step(add(1, 0, 0)).unwrap_err();
    assert!(matches!(err, SimError::Exec(ExecError::Halted)));
    assert_eq!(*ctx.cpu(), halted);
}

#[test]
fn trace_prints_disassembly_and_summary() {
    let mut config = quiet_config();
    config.general.trace_instructions = true;
    let mut ctx = TestContext::with_config(&config, "00222820\n");
    let _ = ctx.run();

    let out = ctx.output();
    assert!(out.contains("[trace] pc=0x00000000 add $a1, $at, $v0"));
    assert!(out.contains("pc = 0x00000004  state = Running"));
    assert!(out.contains("MIPS EMULATION STATISTICS"));
}

#[test]
fn start_pc_is_configurable() {
    let mut config = quiet_config();
    config.general.start_pc = 0x1000_0000;
    let mut ctx = TestContext::with_config(&config, "");
    assert_eq!(ctx.cpu().pc, 0x1000_0000);

    ctx.run_words(&[j(0x10)]);
    assert_eq!(ctx.cpu().pc, 0x1000_0040);
}
