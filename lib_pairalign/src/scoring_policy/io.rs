use std::{
    io::{Read, Write},
    str::FromStr,
};

use log::trace;
use nom::IResult;

use crate::{
    error::Result,
    io::{failure, parse_assignment, parse_end, parse_title, translate_nom_error},
};

use super::ScoringPolicy;


impl ScoringPolicy {
    pub fn read_plain(mut reader: impl Read) -> Result<Self> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;

        Self::parse_plain(&input)
            .map_err(translate_nom_error)
            .map(|(_, output)| output)
    }

    pub fn write_plain(&self, mut writer: impl Write) -> Result<()> {
        writeln!(writer, "# Scoring")?;
        writeln!(writer)?;
        writeln!(writer, "match_score = {}", self.match_score)?;
        writeln!(writer, "mismatch_score = {}", self.mismatch_score)?;
        writeln!(writer, "gap_score = {}", self.gap_score)?;
        Ok(())
    }

    fn parse_plain(input: &str) -> IResult<&str, Self> {
        let (input, title) = parse_title(input)?;
        trace!("Parsing scoring policy '{title}'");

        let (input, match_score) = parse_named_assignment("match_score")(input)?;
        let (input, mismatch_score) = parse_named_assignment("mismatch_score")(input)?;
        let (input, gap_score) = parse_named_assignment("gap_score")(input)?;
        let (input, ()) = parse_end(input)?;

        Ok((
            input,
            Self {
                match_score,
                mismatch_score,
                gap_score,
            },
        ))
    }
}

fn parse_named_assignment<Value: FromStr>(
    identifier: &str,
) -> impl '_ + FnMut(&str) -> IResult<&str, Value> {
    move |input| {
        let (input, (actual_identifier, value)) = parse_assignment(input)?;
        if actual_identifier == identifier {
            trace!("Parsed {identifier}");
            Ok((input, value))
        } else {
            Err(failure(input, nom::error::ErrorKind::Tag))
        }
    }
}
