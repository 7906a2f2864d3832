use thiserror::Error;

/// An expression could not be compiled.
///
/// Carries the full expression text and the byte offset where the problem was
/// found, so callers can show the offending input verbatim.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("{kind} at position {position} in `{text}`")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
    pub text: String,
}

/// What went wrong while compiling an expression.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character `{0}`")]
    UnexpectedChar(char),

    #[error("invalid number `{0}`")]
    InvalidNumber(String),

    #[error("unexpected `{0}`")]
    UnexpectedToken(String),

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("unknown symbol `{0}`")]
    UnknownSymbol(String),

    #[error("unknown function `{0}`")]
    UnknownFunction(String),

    #[error("`{name}` takes {expected} argument(s), got {found}")]
    Arity {
        name: &'static str,
        expected: &'static str,
        found: usize,
    },

    #[error("invalid variable name `{0}`")]
    InvalidVariable(String),

    #[error("expression nests deeper than {0} levels")]
    TooDeep(usize),
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, position: usize, text: &str) -> Self {
        Self {
            kind,
            position,
            text: text.to_owned(),
        }
    }
}
