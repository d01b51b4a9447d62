//! Reply parser entry points

use crate::error::Result;
use crate::normalize::normalize;
use crate::scanner::{DEFAULT_MAX_LINE_LENGTH, scan};
use crate::types::Email;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parse a plain-text email body with default settings
pub fn parse(text: &str) -> Result<Email> {
    Parser::default().parse(text)
}

/// Parse a plain-text email body and return only the visible reply
pub fn parse_reply(text: &str) -> Result<String> {
    parse(text).map(|email| email.visible_text())
}

/// Configurable reply parser
///
/// Holds no state between calls; a single instance can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Parser {
    /// Longest accepted line, in bytes
    pub max_line_length: usize,
}

impl Default for Parser {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl Parser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Split `text` into fragments and classify each one
    pub fn parse(&self, text: &str) -> Result<Email> {
        let normalized = normalize(text);
        let email = Email::from_scan(scan(&normalized, self.max_line_length)?);

        debug!(
            "Parsed email body into {} fragments ({} visible)",
            email.len(),
            email.visible_fragments().count()
        );

        Ok(email)
    }
}
