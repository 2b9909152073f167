use crate::io::EmptyInput;
use crate::machine::{Machine, Suspension};
use crate::syntax::parse_program;
use crate::types::Int;

use super::check;

#[test]
fn add_stores_through_position_mode() {
    let mut machine = Machine::new(&[1, 0, 0, 0, 99]);
    assert_eq!(machine.resume(&mut EmptyInput).unwrap(), Suspension::Halted);
    assert_eq!(machine.memory().read(0), 2);
}

#[test]
fn multiply_writes_past_the_loaded_program() {
    let mut machine = Machine::new(&[2, 4, 4, 5, 99, 0]);
    assert_eq!(machine.resume(&mut EmptyInput).unwrap(), Suspension::Halted);
    assert_eq!(machine.memory().read(5), 9801);
}

#[test]
fn self_modifying_add_chain() {
    let mut machine = Machine::new(&[1, 1, 1, 4, 99, 5, 6, 0, 99]);
    assert_eq!(machine.resume(&mut EmptyInput).unwrap(), Suspension::Halted);
    assert_eq!(machine.memory().read(0), 30);
    assert_eq!(machine.memory().read(4), 2);
}

#[test]
fn echo() {
    check(&[3, 0, 4, 0, 99], &[7], &[7]);
}

#[test]
fn immediate_operands() {
    let mut machine = Machine::new(&[1002, 4, 3, 4, 33]);
    assert_eq!(machine.resume(&mut EmptyInput).unwrap(), Suspension::Halted);
    assert_eq!(machine.memory().read(4), 99);
}

#[test]
fn negative_immediate_operands() {
    let mut machine = Machine::new(&[1101, 100, -1, 4, 0]);
    assert_eq!(machine.resume(&mut EmptyInput).unwrap(), Suspension::Halted);
    assert_eq!(machine.memory().read(4), 99);
}

#[test]
fn equals_in_position_mode() {
    let program = [3, 9, 8, 9, 10, 9, 4, 9, 99, -1, 8];
    check(&program, &[8], &[1]);
    check(&program, &[5], &[0]);
}

#[test]
fn less_than_in_position_mode() {
    let program = [3, 9, 7, 9, 10, 9, 4, 9, 99, -1, 8];
    check(&program, &[5], &[1]);
    check(&program, &[9], &[0]);
}

#[test]
fn equals_in_immediate_mode() {
    let program = [3, 3, 1108, -1, 8, 3, 4, 3, 99];
    check(&program, &[8], &[1]);
    check(&program, &[5], &[0]);
}

#[test]
fn less_than_in_immediate_mode() {
    let program = [3, 3, 1107, -1, 8, 3, 4, 3, 99];
    check(&program, &[5], &[1]);
    check(&program, &[9], &[0]);
}

#[test]
fn jumps_in_position_mode() {
    let program = [3, 12, 6, 12, 15, 1, 13, 14, 13, 4, 13, 99, -1, 0, 1, 9];
    check(&program, &[0], &[0]);
    check(&program, &[5], &[1]);
}

#[test]
fn jumps_in_immediate_mode() {
    let program = [3, 3, 1105, -1, 9, 1101, 0, 0, 12, 4, 12, 99, 1];
    check(&program, &[0], &[0]);
    check(&program, &[5], &[1]);
}

#[test]
fn three_way_compare_against_eight() {
    let program = [
        3, 21, 1008, 21, 8, 20, 1005, 20, 22, 107, 8, 21, 20, 1006, 20, 31, 1106, 0, 36, 98, 0, 0,
        1002, 21, 125, 20, 4, 20, 1105, 1, 46, 104, 999, 1105, 1, 46, 1101, 1000, 1, 20, 4, 20,
        1105, 1, 46, 98, 99,
    ];
    check(&program, &[5], &[999]);
    check(&program, &[8], &[1000]);
    check(&program, &[11], &[1001]);
}

#[test]
fn relative_base_output() {
    // adjust relbase to 1, then output the cell at relbase - 1
    check(&[109, 1, 204, -1, 99], &[], &[109]);
}

#[test]
fn relative_mode_with_zero_base_matches_position_mode() {
    check(&[4, 3, 99, 55], &[], &[55]);
    check(&[204, 3, 99, 55], &[], &[55]);
}

#[test]
fn relative_base_write_target() {
    // adjust relbase to 10, store the input through a relative target,
    // then read it back through position mode
    let program = [109, 10, 203, 2, 4, 12, 99];
    check(&program, &[-34], &[-34]);
}

#[test]
fn replicates_itself() {
    let program = [
        109, 1, 204, -1, 1001, 100, 1, 100, 1008, 100, 16, 101, 1006, 101, 0, 99,
    ];
    check(&program, &[], &program);
}

#[test]
fn sixty_four_bit_multiply() {
    check(
        &[1102, 34915192, 34915192, 7, 4, 7, 99, 0],
        &[],
        &[1219070632396864],
    );
}

#[test]
fn sixty_four_bit_immediate() {
    check(&[104, 1125899906842624, 99], &[], &[1125899906842624]);
}

#[test]
fn parsed_source_runs() {
    let program = parse_program("109,1,204,-1,99").unwrap();
    check(&program, &[], &[109]);
}

#[test]
fn deterministic_replay() {
    let program = [
        3, 21, 1008, 21, 8, 20, 1005, 20, 22, 107, 8, 21, 20, 1006, 20, 31, 1106, 0, 36, 98, 0, 0,
        1002, 21, 125, 20, 4, 20, 1105, 1, 46, 104, 999, 1105, 1, 46, 1101, 1000, 1, 20, 4, 20,
        1105, 1, 46, 98, 99,
    ];

    let mut first = Machine::new(&program);
    let mut second = Machine::new(&program);
    let mut outputs = (Vec::<Int>::new(), Vec::<Int>::new());

    let mut input = std::collections::VecDeque::from(vec![8]);
    crate::machine::run(&mut first, &mut input, &mut outputs.0).unwrap();
    let mut input = std::collections::VecDeque::from(vec![8]);
    crate::machine::run(&mut second, &mut input, &mut outputs.1).unwrap();

    assert_eq!(outputs.0, outputs.1);
    assert_eq!(first.memory(), second.memory());
}
