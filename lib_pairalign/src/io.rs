//! Building blocks for the plain-text parsers.

use std::str::FromStr;

use nom::{
    IResult, Parser,
    bytes::complete::{tag, take_till1, take_while1},
    character::complete::{char, satisfy},
    multi::many0,
    sequence::tuple,
};

use crate::error::Error;

type NomError<'input> = nom::Err<nom::error::Error<&'input str>>;

/// Parses a `# title` line, returning the trimmed title.
pub fn parse_title(input: &str) -> IResult<&str, &str> {
    let input = skip_any_whitespace(input)?;
    let input = char('#')(input)?.0;
    let input = skip_whitespace(input)?;
    let (input, result) = take_till1(is_any_line_break)(input)?;
    Ok((input, result.trim()))
}

/// Parses an `identifier = value` line, where the value must parse as `Value`.
pub fn parse_assignment<Value: FromStr>(input: &str) -> IResult<&str, (&str, Value)> {
    let input = skip_any_whitespace(input)?;
    let (input, identifier) = take_while1(is_identifier_character)(input)?;
    let (input, _) = tuple((parse_whitespace, tag("="), parse_whitespace))(input)?;
    let (input, value) = take_while1(|c: char| !c.is_whitespace())(input)?;

    let value = Value::from_str(value).map_err(|_| failure(input, nom::error::ErrorKind::Verify))?;

    Ok((input, (identifier, value)))
}

/// Fails unless only whitespace remains.
pub fn parse_end(input: &str) -> IResult<&str, ()> {
    let input = skip_any_whitespace(input)?;
    if input.is_empty() {
        Ok((input, ()))
    } else {
        Err(failure(input, nom::error::ErrorKind::Eof))
    }
}

pub fn parse_whitespace(input: &str) -> IResult<&str, ()> {
    skip_whitespace(input).map(|input| (input, ()))
}

pub fn skip_whitespace(input: &str) -> Result<&str, NomError<'_>> {
    many0(satisfy(is_whitespace))
        .parse(input)
        .map(|(input, _)| input)
}

pub fn skip_any_whitespace(input: &str) -> Result<&str, NomError<'_>> {
    many0(satisfy(is_any_whitespace))
        .parse(input)
        .map(|(input, _)| input)
}

pub fn failure(input: &str, code: nom::error::ErrorKind) -> NomError<'_> {
    nom::Err::Failure(nom::error::Error { input, code })
}

fn is_identifier_character(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_any_whitespace(c: char) -> bool {
    is_whitespace(c) || is_any_line_break(c)
}

fn is_whitespace(c: char) -> bool {
    c.is_whitespace() && !is_any_line_break(c)
}

fn is_any_line_break(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn translate_nom_error(error: NomError<'_>) -> Error {
    match error {
        nom::Err::Incomplete(needed) => Error::ParserIncomplete(needed),
        nom::Err::Error(error) | nom::Err::Failure(error) => Error::Parser {
            input: error.input.to_string(),
            kind: error.code,
        },
    }
}
