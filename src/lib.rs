// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Reply Stripper
//!
//! Splits the plain-text body of an email into fragments and tells the reply
//! the author actually wrote apart from quoted history and signatures.
//!
//! # Features
//!
//! - Works with top-posted and bottom-posted replies
//! - Detects `>` quoted blocks and the `On <date>, <name> wrote:` headers
//!   above them, including Yahoo!-style quotes with no `>` markers
//! - Recognizes `-- ` signatures, `-Name` sign-offs and "Sent from my" footers
//! - Flags forwarded-message banners
//! - Unwraps reply headers that mail clients broke across lines
//!
//! Fragments below the last piece of original content that are quoted,
//! signatures, or blank are hidden.
//!
//! # Example
//!
//! ```rust
//! use mail_strip::parse;
//!
//! let text = "Yeah, that works!\n\n-Bob\n\nOn 01/03/11 7:07 PM, Alice wrote:\n\
//!             > Hi Bob,\n>\n> can I push the latest release later tonight?\n";
//! let email = parse(text).unwrap();
//!
//! assert_eq!(email.visible_text(), "Yeah, that works!");
//! assert!(email[1].is_signature());
//! assert!(email[2].is_quoted());
//! ```

mod error;
mod normalize;
mod parser;
mod patterns;
mod scanner;
mod segmenter;
mod types;

pub use error::{ParseError, Result};
pub use normalize::normalize;
pub use parser::{Parser, parse, parse_reply};
pub use scanner::DEFAULT_MAX_LINE_LENGTH;
pub use types::*;
