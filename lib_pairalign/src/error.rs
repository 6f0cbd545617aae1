use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid input: the {0} sequence is empty.")]
    InvalidInput(SequenceName),

    #[error("An IO error occurred: {0}.")]
    Io(#[from] std::io::Error),

    #[error("A parsing error of kind '{kind:?}' occurred when the remaining input was '{input}'.")]
    Parser {
        input: String,
        kind: nom::error::ErrorKind,
    },

    #[error("Parsing was unsuccessful due to incomplete input: {0:?}.")]
    ParserIncomplete(nom::Needed),
}

/// Names one of the two input sequences in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceName {
    Reference,
    Query,
}

impl std::fmt::Display for SequenceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SequenceName::Reference => write!(f, "reference"),
            SequenceName::Query => write!(f, "query"),
        }
    }
}
