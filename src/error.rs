use thiserror::Error;

/// Domain checker error types.
///
/// Only the input collaborators fail; building and querying a matcher never does.
#[derive(Error, Debug)]
pub enum CheckerError {
    #[error("Parse error at line {line}: {message}")]
    ParseErrorAtLine { line: usize, message: String },

    #[error("Unexpected end of input: expected {expected}, read {found}")]
    UnexpectedEof { expected: String, found: usize },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CheckerError>;
