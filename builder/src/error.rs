use std::io;
use thiserror::Error;

/// Failure to build a game from text or tables.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: expected {expected}, found {found}")]
    Unexpected {
        line: usize,
        expected: &'static str,
        found: String,
    },
    #[error("unexpected end of input, expected {expected}")]
    Truncated { expected: &'static str },
    #[error("line {line}: unterminated string")]
    UnterminatedString { line: usize },
    #[error("line {line}: malformed number `{text}`")]
    BadNumber { line: usize, text: String },
    #[error("line {line}: unsupported header `{found}`")]
    Header { line: usize, found: String },
    #[error("line {line}: outcome id {id} does not exist")]
    UnknownOutcome { line: usize, id: usize },
    #[error("dimensions {dimensions:?} exceed {limit} strategy profiles")]
    TooLarge { dimensions: Vec<usize>, limit: usize },
    #[error("expected {expected} values, found {found}")]
    Shape { expected: usize, found: usize },
}
