use std::collections::VecDeque;

use rustyline::error::ReadlineError;
use rustyline::Editor;
use thiserror::Error;

use crate::io::push_line;
use crate::machine::{self, Machine, Suspension};
use crate::syntax;
use crate::types::Int;

#[derive(Debug)]
pub enum Command {
    Load(Vec<Int>),
    Run,
    Feed(Vec<Int>),
    Ascii(String),
    ShowState,
    Reset,
}

impl Command {
    fn parse(line: &str) -> syntax::Result<Command> {
        syntax::parse("command", parse::input_line, line)
    }
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Parse error: {0}")]
    Parse(#[from] syntax::Error),

    #[error("Machine error: {0}")]
    Machine(#[from] machine::Error),

    #[error("No program loaded")]
    NoProgram,
}

pub struct Repl {
    program: Vec<Int>,
    machine: Option<Machine>,
    pending: VecDeque<Int>,
}

impl Repl {
    pub fn new() -> Self {
        Repl {
            program: Vec::new(),
            machine: None,
            pending: VecDeque::new(),
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<(), CommandError> {
        match command {
            Command::Load(program) => {
                self.machine = Some(Machine::new(&program));
                self.program = program;
                self.pending.clear();
            }
            Command::Feed(values) => self.pending.extend(values),
            Command::Ascii(line) => push_line(&mut self.pending, &line),
            Command::Run => {
                let machine = self.machine.as_mut().ok_or(CommandError::NoProgram)?;

                let mut text = String::new();
                let suspension = loop {
                    match machine.resume(&mut self.pending)? {
                        Suspension::Output(value) => {
                            if value == 10 || (32..127).contains(&value) {
                                text.push(value as u8 as char);
                            } else {
                                flush(&mut text);
                                println!("O: {}", value);
                            }
                        }
                        suspension => break suspension,
                    }
                };

                flush(&mut text);
                if suspension == Suspension::NeedsInput {
                    println!("(input required)");
                } else {
                    println!("(halted)");
                }
            }
            Command::ShowState => match &self.machine {
                Some(machine) => println!(
                    "ip = {}, relbase = {}, halted = {}, pending inputs = {}",
                    machine.ip(),
                    machine.relbase(),
                    machine.is_halted(),
                    self.pending.len()
                ),
                None => println!("No program loaded"),
            },
            Command::Reset => {
                if self.machine.is_none() {
                    return Err(CommandError::NoProgram);
                }

                self.machine = Some(Machine::new(&self.program));
                self.pending.clear();
            }
        }

        Ok(())
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        let mut rl = Editor::<()>::new();
        if rl.load_history("history.txt").is_err() {
            println!("No previous history.");
        }

        loop {
            let readline = rl.readline(">> ");
            match readline {
                Ok(line) if line.trim().is_empty() => {}
                Ok(line) => {
                    rl.add_history_entry(line.as_str());

                    let result = Command::parse(line.as_str())
                        .map_err(CommandError::from)
                        .and_then(|command| self.execute(command));

                    if let Err(e) = result {
                        println!("{}", e);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
        rl.save_history("history.txt").unwrap();

        Ok(())
    }
}

fn flush(text: &mut String) {
    if text.is_empty() {
        return;
    }

    print!("{}", text);
    if !text.ends_with('\n') {
        println!();
    }
    text.clear();
}

mod parse {
    // Input ::= Load | Run | Feed | State | Reset | Ascii
    // Load  ::= ':load' Program
    // Run   ::= ':run'
    // Feed  ::= ':in' Integer+
    // State ::= ':state'
    // Reset ::= ':reset'
    // Ascii ::= ':ascii' Line | Line

    use super::Command;
    use crate::syntax::{integer, program, spaces, Input, Parsed};

    use nom::branch::alt;
    use nom::bytes::complete::tag;
    use nom::combinator::{map, rest};
    use nom::multi::many1;
    use nom::sequence::{preceded, terminated};

    pub fn input_line(input: Input) -> Parsed<Command> {
        alt((
            command(":load", map(program, Command::Load)),
            command(":run", map(spaces, |_| Command::Run)),
            command(":in", map(terminated(many1(integer), spaces), Command::Feed)),
            command(":state", map(spaces, |_| Command::ShowState)),
            command(":reset", map(spaces, |_| Command::Reset)),
            command(":ascii", map(line, Command::Ascii)),
            map(line, Command::Ascii),
        ))(input)
    }

    fn line(input: Input) -> Parsed<String> {
        map(rest, |text: Input| text.trim().to_string())(input)
    }

    fn command<'a, P>(prefix: &'a str, parser: P) -> impl Fn(Input<'a>) -> Parsed<Command>
    where
        P: Fn(Input<'a>) -> Parsed<Command>,
    {
        preceded(tag(prefix), parser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_takes_a_program() {
        match Command::parse(":load 109, -1, 204, 99").unwrap() {
            Command::Load(program) => assert_eq!(program, vec![109, -1, 204, 99]),
            command => panic!("Unexpected command: {:?}", command),
        }
    }

    #[test]
    fn feed_takes_integers() {
        match Command::parse(":in 1 -2 3").unwrap() {
            Command::Feed(values) => assert_eq!(values, vec![1, -2, 3]),
            command => panic!("Unexpected command: {:?}", command),
        }
    }

    #[test]
    fn bare_lines_are_ascii_commands() {
        match Command::parse("take mug").unwrap() {
            Command::Ascii(line) => assert_eq!(line, "take mug"),
            command => panic!("Unexpected command: {:?}", command),
        }
    }

    #[test]
    fn run_rejects_trailing_garbage() {
        assert!(Command::parse(":run 3").is_err());
    }
}
