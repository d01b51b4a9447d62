//! Error types for reply parsing

use thiserror::Error;

/// Errors that can occur while splitting an email body into fragments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A single line is longer than the parser's line buffer allows.
    ///
    /// `line` is 1-based and counts lines of the normalized text.
    #[error("Line {line} is {length} bytes long, exceeding the limit of {limit} bytes")]
    LineTooLong {
        line: usize,
        length: usize,
        limit: usize,
    },
}

/// Result type for reply parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;
