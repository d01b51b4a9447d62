//! Reverse line scanner.
//!
//! The normalized body is reversed as a whole, then handed to the segmenter
//! one line at a time. Scanning from the end lets a single forward pass decide
//! which trailing fragments are hidden.

use crate::error::{ParseError, Result};
use crate::segmenter::Segmenter;
use crate::types::Fragment;
use tracing::debug;

/// Default per-line limit, matching a 64 KiB line buffer.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 64 * 1024;

/// Reverse a string by `char`.
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Segment normalized text, returning fragments in scan (reverse) order.
///
/// Fails on the first line longer than `max_line_length` bytes; nothing
/// segmented up to that point is returned.
pub fn scan(normalized: &str, max_line_length: usize) -> Result<Vec<Fragment>> {
    let reversed = reverse(normalized);
    let line_count = reversed.bytes().filter(|&b| b == b'\n').count() + 1;

    let mut segmenter = Segmenter::new();
    for (index, line) in reversed.split('\n').enumerate() {
        if line.len() > max_line_length {
            let line_number = line_count - index;
            debug!(
                "Aborting scan: line {} is {} bytes (limit {})",
                line_number,
                line.len(),
                max_line_length
            );
            return Err(ParseError::LineTooLong {
                line: line_number,
                length: line.len(),
                limit: max_line_length,
            });
        }
        segmenter.scan_line(line);
    }

    Ok(segmenter.finish())
}
