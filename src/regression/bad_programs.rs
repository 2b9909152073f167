use std::collections::VecDeque;

use crate::io::{EmptyInput, IgnoreOutput};
use crate::machine::{run, Error, Machine};
use crate::types::Int;

fn fail(program: &[Int]) -> Error {
    run(&mut Machine::new(program), &mut EmptyInput, &mut IgnoreOutput).unwrap_err()
}

#[test]
fn unknown_opcode() {
    assert_eq!(fail(&[98]), Error::UnknownOpcode { opcode: 98, ip: 0 });
}

#[test]
fn unknown_opcode_reports_the_faulting_address() {
    assert_eq!(
        fail(&[1101, 1, 1, 5, 42, 0]),
        Error::UnknownOpcode { opcode: 42, ip: 4 }
    );
}

#[test]
fn empty_memory_is_not_a_program() {
    // cell 0 reads as 0, which is not an opcode
    assert_eq!(fail(&[]), Error::UnknownOpcode { opcode: 0, ip: 0 });
}

#[test]
fn negative_instruction_word() {
    assert_eq!(fail(&[-98]), Error::UnknownOpcode { opcode: -98, ip: 0 });
}

#[test]
fn immediate_write_target() {
    assert_eq!(fail(&[10001, 0, 0, 0, 99]), Error::InvalidWriteMode { ip: 0 });
}

#[test]
fn immediate_input_target() {
    let mut machine = Machine::new(&[103, 0, 99]);
    let mut input = VecDeque::from(vec![1]);
    assert_eq!(
        machine.resume(&mut input).unwrap_err(),
        Error::InvalidWriteMode { ip: 0 }
    );
}

#[test]
fn unknown_mode_digit() {
    assert_eq!(fail(&[304, 0, 99]), Error::UnknownMode { mode: 3, ip: 0 });
}

#[test]
fn negative_position_address() {
    assert_eq!(fail(&[1, -1, 0, 0, 99]), Error::NegativeAddress { addr: -1 });
}

#[test]
fn negative_relative_address() {
    // relbase drops to -3, then a relative read resolves to address -3
    assert_eq!(fail(&[109, -3, 204, 0, 99]), Error::NegativeAddress { addr: -3 });
}

#[test]
fn negative_jump_target() {
    assert_eq!(fail(&[1105, 1, -4, 99]), Error::NegativeAddress { addr: -4 });
}
