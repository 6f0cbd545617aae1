use anyhow::{Result, anyhow};
use log::debug;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use utf8_chars::BufReadCharsExt;

/// A named sequence read from a fasta file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FastaRecord {
    pub id: String,
    pub comment: String,
    pub sequence: String,
}

impl FastaRecord {
    pub fn new(id: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            comment: String::new(),
            sequence: sequence.into(),
        }
    }

    /// The id followed by the comment, if any.
    pub fn name(&self) -> String {
        if self.comment.is_empty() {
            self.id.clone()
        } else {
            format!("{} {}", self.id, self.comment)
        }
    }
}

pub fn parse_pair_fasta_file(path: impl AsRef<Path>) -> Result<(FastaRecord, FastaRecord)> {
    let records = parse_fasta_file(path)?;
    let [first, second]: [FastaRecord; 2] = records.try_into().map_err(|records: Vec<_>| {
        anyhow!(
            "Expected paired fasta file with two records, but found {} records",
            records.len()
        )
    })?;
    Ok((first, second))
}

pub fn parse_single_fasta_file(path: impl AsRef<Path>) -> Result<FastaRecord> {
    let records = parse_fasta_file(path)?;
    let [record]: [FastaRecord; 1] = records.try_into().map_err(|records: Vec<_>| {
        anyhow!(
            "Expected single-record fasta file, but found {} records",
            records.len()
        )
    })?;
    Ok(record)
}

fn parse_fasta_file(path: impl AsRef<Path>) -> Result<Vec<FastaRecord>> {
    let path = path.as_ref();
    debug!("Parsing fasta file {path:?}");

    let file =
        File::open(path).map_err(|error| anyhow!("Unable to open input file {path:?}: {error}"))?;
    let records = parse_fasta(BufReader::new(file))?;

    if records.is_empty() {
        Err(anyhow!("Input file {path:?} contains no fasta record"))
    } else {
        Ok(records)
    }
}

/// Parses all records of a fasta file.
///
/// A '>' starts a new record only at the beginning of a line.
/// Line breaks inside sequences are dropped.
pub fn parse_fasta(reader: impl BufRead) -> Result<Vec<FastaRecord>> {
    enum State {
        FileStart { newline: bool },
        Id,
        Comment,
        Sequence { newline: bool },
    }

    let mut state = State::FileStart { newline: true };
    let mut records = Vec::new();
    let mut current_record = FastaRecord::default();

    for character in CharacterIterator::new(reader) {
        state = match (state, character?) {
            (State::FileStart { .. }, Character::Newline) => State::FileStart { newline: true },
            (State::FileStart { newline: true }, Character::RecordStart) => State::Id,
            (State::FileStart { newline: false }, Character::RecordStart) => {
                return Err(anyhow!(
                    "First fasta record is not preceded by a newline character"
                ));
            }
            (State::FileStart { .. }, Character::Other(c)) => {
                if c.is_whitespace() {
                    State::FileStart { newline: false }
                } else {
                    return Err(anyhow!(
                        "Found non-whitespace character before first fasta record: {c}"
                    ));
                }
            }

            (State::Id, Character::Newline) => State::Sequence { newline: true },
            (State::Id, Character::RecordStart) => {
                current_record.id.push('>');
                State::Id
            }
            (State::Id, Character::Other(c)) => {
                if c.is_whitespace() {
                    State::Comment
                } else {
                    current_record.id.push(c);
                    State::Id
                }
            }

            (State::Comment, Character::Newline) => State::Sequence { newline: true },
            (State::Comment, Character::RecordStart) => {
                current_record.comment.push('>');
                State::Comment
            }
            (State::Comment, Character::Other(c)) => {
                current_record.comment.push(c);
                State::Comment
            }

            (State::Sequence { .. }, Character::Newline) => State::Sequence { newline: true },
            (State::Sequence { newline: true }, Character::RecordStart) => {
                records.push(std::mem::take(&mut current_record));
                State::Id
            }
            (State::Sequence { newline: false }, Character::RecordStart) => {
                current_record.sequence.push('>');
                State::Sequence { newline: false }
            }
            (State::Sequence { .. }, Character::Other(c)) => {
                if !c.is_whitespace() {
                    current_record.sequence.push(c);
                }
                State::Sequence { newline: false }
            }
        };
    }

    if !matches!(state, State::FileStart { .. }) {
        records.push(current_record);
    }

    for record in &mut records {
        record.comment = record.comment.trim().to_string();
    }

    Ok(records)
}

enum Character {
    Newline,
    RecordStart,
    Other(char),
}

struct CharacterIterator<Reader: BufRead> {
    reader: Reader,
}

impl<Reader: BufRead> CharacterIterator<Reader> {
    fn new(reader: Reader) -> Self {
        Self { reader }
    }
}

impl<Reader: BufRead> Iterator for CharacterIterator<Reader> {
    type Item = Result<Character>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader
            .read_char_raw()
            .map(|result| {
                result.map(|c| match c {
                    '\n' | '\r' => Character::Newline,
                    '>' => Character::RecordStart,
                    c => Character::Other(c),
                })
            })
            .map_err(|error| anyhow!("Error reading character from fasta input: {error}"))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::{FastaRecord, parse_fasta};

    #[test]
    fn multiline_records() {
        let input = ">ref first sequence\nGATT\nACA\n\n>query\r\nGCAT\r\nGCU\n";
        let records = parse_fasta(input.as_bytes()).unwrap();

        assert_eq!(
            records,
            vec![
                FastaRecord {
                    id: "ref".to_string(),
                    comment: "first sequence".to_string(),
                    sequence: "GATTACA".to_string(),
                },
                FastaRecord::new("query", "GCATGCU"),
            ]
        );
        assert_eq!(records[0].name(), "ref first sequence");
        assert_eq!(records[1].name(), "query");
    }

    #[test]
    fn empty_sequence() {
        let records = parse_fasta(">empty\n>query\nACGT\n".as_bytes()).unwrap();
        assert_eq!(
            records,
            vec![FastaRecord::new("empty", ""), FastaRecord::new("query", "ACGT")]
        );
    }

    #[test]
    fn no_records() {
        assert!(parse_fasta("\n  \n".as_bytes()).unwrap().is_empty());
        assert!(parse_fasta("ACGT\n>query\nACGT".as_bytes()).is_err());
    }
}
