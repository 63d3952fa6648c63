//! # Syscall Tests
//!
//! Service selected by `$v0`, argument in `$a0`. Console traffic is asserted
//! through a mock so every read and write is accounted for.

use crate::common::builder::instruction::syscall;
use crate::common::mocks::console::MockConsole;
use pretty_assertions::assert_eq;
use rstest::rstest;
use spemu_core::common::data::AccessType;
use spemu_core::common::error::ExecError;
use spemu_core::core::Cpu;
use spemu_core::core::arch::mode::RunState;
use spemu_core::isa::abi::{REG_A0, REG_V0};
use spemu_core::isa::decode::decode;
use spemu_core::soc::Memory;
use std::io;

fn cpu_with(v0: i32, a0: i32) -> Cpu {
    let mut cpu = Cpu::default();
    cpu.regs.write(REG_V0, v0);
    cpu.regs.write(REG_A0, a0);
    cpu
}

fn run_syscall(cpu: &mut Cpu, console: &mut MockConsole) -> Result<(), ExecError> {
    let inst = decode(syscall()).unwrap();
    cpu.execute(&inst, console).map(|taken| assert!(!taken))
}

#[rstest]
#[case(42, "42")]
#[case(0, "0")]
#[case(-17, "-17")]
#[case(i32::MIN, "-2147483648")]
fn print_int(#[case] a0: i32, #[case] expected: &'static str) {
    let mut cpu = cpu_with(1, a0);
    let mut console = MockConsole::new();
    console
        .expect_write_line()
        .withf(move |text| text == expected)
        .times(1)
        .returning(|_| Ok(()));

    run_syscall(&mut cpu, &mut console).unwrap();
    assert_eq!(cpu.pc, 4);
}

#[rstest]
#[case(0, "Hello")]
#[case(1, "ello")]
#[case(5, "")]
fn print_string(#[case] a0: i32, #[case] expected: &'static str) {
    let mut cpu = cpu_with(4, a0);
    // "Hello\0" packed big-endian.
    cpu.memory = Memory::with_contents(32, &[0x4865_6C6C, 0x6F00_0000]);
    let mut console = MockConsole::new();
    console
        .expect_write_line()
        .withf(move |text| text == expected)
        .times(1)
        .returning(|_| Ok(()));

    run_syscall(&mut cpu, &mut console).unwrap();
    assert_eq!(cpu.pc, 4);
}

#[test]
fn unterminated_string_is_out_of_bounds() {
    let mut cpu = cpu_with(4, 0);
    cpu.memory = Memory::with_contents(2, &[0x4141_4141, 0x4242_4242]);
    let before = cpu.clone();
    let mut console = MockConsole::new();

    let err = run_syscall(&mut cpu, &mut console).unwrap_err();
    assert!(matches!(
        err,
        ExecError::OutOfBounds { access: AccessType::StringRead, .. }
    ));
    assert_eq!(cpu, before);
}

#[rstest]
#[case(-1)]
#[case(128)]
fn string_start_outside_memory(#[case] a0: i32) {
    let mut cpu = cpu_with(4, a0);
    let mut console = MockConsole::new();
    let err = run_syscall(&mut cpu, &mut console).unwrap_err();
    assert!(matches!(err, ExecError::OutOfBounds { .. }));
    assert_eq!(cpu.pc, 0);
}

#[rstest]
#[case("17", 17)]
#[case("  -5 ", -5)]
#[case("2147483647", i32::MAX)]
fn read_int(#[case] line: &'static str, #[case] val: i32) {
    let mut cpu = cpu_with(5, 0);
    let mut console = MockConsole::new();
    console
        .expect_read_line()
        .times(1)
        .returning(move || Ok(Some(line.to_string())));

    run_syscall(&mut cpu, &mut console).unwrap();
    assert_eq!(cpu.regs.read(REG_V0), val);
    assert_eq!(cpu.pc, 4);
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("2147483648")]
#[case("1.5")]
fn read_int_rejects_bad_input(#[case] line: &'static str) {
    let mut cpu = cpu_with(5, 0);
    let mut console = MockConsole::new();
    console
        .expect_read_line()
        .returning(move || Ok(Some(line.to_string())));

    match run_syscall(&mut cpu, &mut console) {
        Err(ExecError::InvalidSyscallInput { input }) => assert_eq!(input, line),
        other => panic!("expected invalid input, got {other:?}"),
    }
    assert_eq!(cpu.regs.read(REG_V0), 5);
    assert_eq!(cpu.pc, 0);
}

#[test]
fn read_int_at_end_of_input() {
    let mut cpu = cpu_with(5, 0);
    let mut console = MockConsole::new();
    console.expect_read_line().returning(|| Ok(None));

    let err = run_syscall(&mut cpu, &mut console).unwrap_err();
    assert!(matches!(err, ExecError::EndOfInput));
    assert_eq!(cpu.pc, 0);
}

#[test]
fn exit_halts_and_rejects_further_instructions() {
    let mut cpu = cpu_with(10, 0);
    let mut console = MockConsole::new();

    run_syscall(&mut cpu, &mut console).unwrap();
    assert_eq!(cpu.state, RunState::Halted);
    assert!(cpu.is_halted());
    assert_eq!(cpu.pc, 4);

    let err = run_syscall(&mut cpu, &mut console).unwrap_err();
    assert!(matches!(err, ExecError::Halted));
    assert_eq!(cpu.pc, 4);
    assert_eq!(cpu.state, RunState::Halted);
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(11)]
#[case(-1)]
fn unknown_code_is_rejected(#[case] code: i32) {
    let mut cpu = cpu_with(code, 0);
    let before = cpu.clone();
    let mut console = MockConsole::new();

    let err = run_syscall(&mut cpu, &mut console).unwrap_err();
    assert!(matches!(err, ExecError::UnsupportedSyscall { code: c } if c == code));
    assert_eq!(cpu, before);
}

#[test]
fn console_failure_propagates() {
    let mut cpu = cpu_with(1, 3);
    let mut console = MockConsole::new();
    console
        .expect_write_line()
        .times(1)
        .returning(|_| Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed")));

    let err = run_syscall(&mut cpu, &mut console).unwrap_err();
    assert!(matches!(err, ExecError::Io(_)));
    assert_eq!(cpu.pc, 0);
}
