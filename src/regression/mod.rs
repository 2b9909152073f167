mod bad_programs;
mod programs;
mod suspension;

use std::collections::VecDeque;

use crate::machine::{run, Machine, Suspension};
use crate::types::Int;

// Run |program| to halt with |stdin| queued up front and check the exact
// output sequence. The whole queue must have been consumed.
pub fn check(program: &[Int], stdin: &[Int], stdout: &[Int]) {
    let mut machine = Machine::new(program);
    let mut input = stdin.iter().copied().collect::<VecDeque<Int>>();
    let mut output = Vec::<Int>::new();

    let suspension = run(&mut machine, &mut input, &mut output).unwrap();

    assert_eq!(suspension, Suspension::Halted);
    assert_eq!(output, stdout);
    assert!(input.is_empty());
}
