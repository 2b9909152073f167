use std::collections::VecDeque;

use crate::io::{push_line, EmptyInput};
use crate::machine::{run, Machine, Suspension};
use crate::types::Int;

#[test]
fn input_retries_at_the_same_instruction() {
    let mut machine = Machine::new(&[3, 0, 4, 0, 99]);

    assert_eq!(
        machine.resume(&mut EmptyInput).unwrap(),
        Suspension::NeedsInput
    );
    assert_eq!(machine.ip(), 0);
    assert_eq!(
        machine.resume(&mut EmptyInput).unwrap(),
        Suspension::NeedsInput
    );
    assert_eq!(machine.ip(), 0);

    // same machine, same instruction, now with input available
    let mut input = VecDeque::from(vec![7]);
    assert_eq!(machine.resume(&mut input).unwrap(), Suspension::Output(7));
    assert_eq!(machine.resume(&mut input).unwrap(), Suspension::Halted);
}

#[test]
fn halt_is_idempotent() {
    let mut machine = Machine::new(&[99]);

    assert_eq!(machine.resume(&mut EmptyInput).unwrap(), Suspension::Halted);
    let snapshot = machine.memory().clone();

    assert_eq!(machine.resume(&mut EmptyInput).unwrap(), Suspension::Halted);
    assert_eq!(machine.memory(), &snapshot);
    assert!(machine.is_halted());
}

#[test]
fn each_output_suspends_once() {
    let mut machine = Machine::new(&[104, 1, 104, 2, 99]);

    assert_eq!(machine.resume(&mut EmptyInput).unwrap(), Suspension::Output(1));
    assert_eq!(machine.resume(&mut EmptyInput).unwrap(), Suspension::Output(2));
    assert_eq!(machine.resume(&mut EmptyInput).unwrap(), Suspension::Halted);
}

#[test]
fn single_exchange_turns() {
    // read a value, report it back, loop
    let mut machine = Machine::new(&[3, 9, 4, 9, 1105, 1, 0, 0, 0, 0]);

    for value in [2, 1, 3].iter().copied() {
        let mut input = VecDeque::from(vec![value]);
        assert_eq!(
            machine.resume(&mut input).unwrap(),
            Suspension::Output(value)
        );
        assert_eq!(machine.resume(&mut input).unwrap(), Suspension::NeedsInput);
    }
}

#[test]
fn bulk_ascii_session() {
    // prints "?\n", reads one three-code line, then reports a value far
    // outside the printable range
    let program = [
        104, 63, 104, 10, 3, 50, 3, 50, 3, 50, 104, 1125899906842624, 99,
    ];
    let mut machine = Machine::new(&program);

    let mut input = VecDeque::new();
    push_line(&mut input, "go");

    let mut output = Vec::<Int>::new();
    let suspension = run(&mut machine, &mut input, &mut output).unwrap();

    assert_eq!(suspension, Suspension::Halted);
    assert_eq!(output, vec![63, 10, 1125899906842624]);
    assert_eq!(machine.memory().read(50), 10);
}

#[test]
fn run_stops_at_needs_input() {
    let mut machine = Machine::new(&[104, 5, 3, 0, 99]);

    let mut output = Vec::<Int>::new();
    let suspension = run(&mut machine, &mut EmptyInput, &mut output).unwrap();

    assert_eq!(suspension, Suspension::NeedsInput);
    assert_eq!(output, vec![5]);
    assert_eq!(machine.ip(), 2);

    let mut input = VecDeque::from(vec![0]);
    assert_eq!(
        run(&mut machine, &mut input, &mut output).unwrap(),
        Suspension::Halted
    );
}

#[test]
fn pending_inputs_survive_outputs() {
    // both inputs queued before the run; an output fires between the reads
    let program = [3, 11, 104, -5, 3, 12, 1, 11, 12, 0, 99, 0, 0];
    let mut machine = Machine::new(&program);

    let mut input: VecDeque<Int> = VecDeque::from(vec![20, 22]);
    let mut output = Vec::<Int>::new();
    let suspension = run(&mut machine, &mut input, &mut output).unwrap();

    assert_eq!(suspension, Suspension::Halted);
    assert_eq!(output, vec![-5]);
    assert_eq!(machine.memory().read(0), 42);
}
