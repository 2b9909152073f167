use std::fmt::Debug;

use nom::bytes::complete::tag;
use nom::character::complete::digit1;
use nom::combinator::{map_res, opt, recognize};
use nom::multi::separated_list;
use nom::sequence::{pair, preceded, terminated};
use thiserror::Error;

use crate::types::Int;

pub type Input<'a> = &'a str;
pub type ParseError<'a> = nom::error::VerboseError<Input<'a>>;
pub type Parsed<'a, O> = nom::IResult<Input<'a>, O, ParseError<'a>>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Failed(String),

    #[error("Incomplete parse of {what}:\nParsed: {parsed}\nRest: {rest}")]
    Incomplete {
        what: &'static str,
        parsed: String,
        rest: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn spaces(input: Input) -> Parsed<Input> {
    nom::character::complete::multispace0(input)
}

// see https://github.com/rust-lang/rust-clippy/issues/2944
#[allow(clippy::needless_lifetimes)]
pub fn key<'a>(key: &'a str) -> impl Fn(Input<'a>) -> Parsed<Input> {
    nom::sequence::preceded(spaces, nom::bytes::complete::tag(key))
}

// Integer ::= ['-'] Digit+
pub fn integer(input: Input) -> Parsed<Int> {
    preceded(
        spaces,
        map_res(recognize(pair(opt(tag("-")), digit1)), |number: Input| {
            number.parse::<Int>()
        }),
    )(input)
}

// Program ::= [Integer (',' Integer)*]
pub fn program(input: Input) -> Parsed<Vec<Int>> {
    terminated(separated_list(key(","), integer), spaces)(input)
}

// Parse a whole program image from its source text.
pub fn parse_program(input: Input) -> Result<Vec<Int>> {
    parse("program", program, input)
}

fn err(e: nom::Err<ParseError>, what: &str, input: &str) -> Error {
    let error = match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => format!(
            "Failed to parse {}:\n{}",
            what,
            nom::error::convert_error(input, e)
        ),
        nom::Err::Incomplete(needed) => format!("Incomplete parse of {}: {:?}", what, needed),
    };

    Error::Failed(error)
}

fn incomplete<T: Debug>(value: T, what: &'static str, rest: Input) -> Error {
    Error::Incomplete {
        what,
        parsed: format!("{:?}", value),
        rest: rest.to_string(),
    }
}

pub fn parse<P, T: Debug>(what: &'static str, parser: P, input: Input) -> Result<T>
where
    P: Fn(Input) -> Parsed<T>,
{
    let (input, v) = parser(input).map_err(|e| err(e, what, input))?;

    if !input.is_empty() {
        return Err(incomplete(v, what, input));
    }

    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_separated_integers() {
        assert_eq!(parse_program("1,0,0,0,99").unwrap(), vec![1, 0, 0, 0, 99]);
    }

    #[test]
    fn negative_values_and_whitespace() {
        assert_eq!(
            parse_program(" 109, -1,\n204 , 5 \n").unwrap(),
            vec![109, -1, 204, 5]
        );
    }

    #[test]
    fn empty_source_is_the_empty_program() {
        assert_eq!(parse_program("").unwrap(), Vec::<Int>::new());
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        assert!(parse_program("1,2,x").is_err());
        assert!(parse_program("1,2,").is_err());
    }
}
