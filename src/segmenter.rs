//! Fragment segmentation state machine.
//!
//! Lines arrive in reverse order (last line of the email first), each already
//! reversed character by character. The machine is either `Empty` or
//! `Accumulating` an open fragment; consuming it with [`Segmenter::finish`]
//! closes whatever is still open and is the terminal state.

use crate::patterns;
use crate::scanner::reverse;
use crate::types::Fragment;
use tracing::trace;

/// Per-line predicates, evaluated once before any transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LineTraits {
    quoted: bool,
    quote_header: bool,
    blank: bool,
}

impl LineTraits {
    /// Classify a reversed line, returning the text to keep and its traits.
    ///
    /// Leading whitespace of the reversed line is dropped unless the line looks
    /// like a signature start, which may be indented on purpose.
    fn classify(raw: &str) -> (&str, Self) {
        let signature_start = patterns::is_signature_start(raw);
        let line = if signature_start { raw } else { raw.trim_start() };

        let traits = Self {
            quoted: patterns::is_quoted(line),
            quote_header: patterns::is_quote_header(line),
            blank: line.is_empty(),
        };

        (line, traits)
    }
}

/// A fragment that is still collecting lines.
#[derive(Debug)]
struct OpenFragment<'a> {
    /// Reversed lines, most recently scanned last.
    lines: Vec<&'a str>,
    quoted: bool,
    signature: bool,
    forwarded: bool,
}

impl<'a> OpenFragment<'a> {
    fn new(line: &'a str, quoted: bool) -> Self {
        Self {
            lines: vec![line],
            quoted,
            signature: false,
            forwarded: false,
        }
    }

    /// A fragment keeps the line when quoted-ness agrees, or when it is quoted
    /// and the line is a quote header or blank.
    const fn accepts(&self, traits: &LineTraits) -> bool {
        self.quoted == traits.quoted || (self.quoted && (traits.quote_header || traits.blank))
    }

    /// Check the fragment's first line (last in the buffer) for a forwarded
    /// banner or a signature start, tagging the fragment if one is found.
    fn tag_boundary(&mut self) -> bool {
        let Some(&first) = self.lines.last() else {
            return false;
        };

        if patterns::is_forwarded(first) {
            self.forwarded = true;
            true
        } else if patterns::is_signature_start(first) {
            self.signature = true;
            true
        } else {
            false
        }
    }

    /// Join and un-reverse the buffered lines.
    fn freeze(self) -> Fragment {
        Fragment {
            content: reverse(&self.lines.join("\n")),
            quoted: self.quoted,
            signature: self.signature,
            forwarded: self.forwarded,
            hidden: false,
        }
    }
}

#[derive(Debug, Default)]
enum State<'a> {
    #[default]
    Empty,
    Accumulating(OpenFragment<'a>),
}

/// Splits reversed lines into classified fragments.
#[derive(Debug, Default)]
pub struct Segmenter<'a> {
    state: State<'a>,
    /// Closed fragments, in scan (reverse) order.
    closed: Vec<Fragment>,
    /// Set once a fragment with original content has been closed. Every
    /// fragment closed before that is part of the hidden tail of the email.
    found_visible: bool,
}

impl<'a> Segmenter<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the next reversed line.
    pub fn scan_line(&mut self, raw: &'a str) {
        let (line, traits) = LineTraits::classify(raw);

        if traits.blank
            && let State::Accumulating(open) = &mut self.state
            && open.tag_boundary()
        {
            self.close();
        }

        // Yahoo! does not mark quoted lines with '>', so a quote header showing
        // up under an unquoted fragment makes it quoted after the fact.
        if traits.quote_header
            && let State::Accumulating(open) = &mut self.state
        {
            open.quoted = true;
        }

        self.state = match std::mem::take(&mut self.state) {
            State::Accumulating(mut open) if open.accepts(&traits) => {
                open.lines.push(line);
                State::Accumulating(open)
            }
            previous => {
                self.close_state(previous);
                State::Accumulating(OpenFragment::new(line, traits.quoted))
            }
        };
    }

    /// Close any open fragment and return every fragment in scan order.
    #[must_use]
    pub fn finish(mut self) -> Vec<Fragment> {
        self.close();
        self.closed
    }

    fn close(&mut self) {
        let state = std::mem::take(&mut self.state);
        self.close_state(state);
    }

    fn close_state(&mut self, state: State<'a>) {
        let State::Accumulating(open) = state else {
            return;
        };

        let mut fragment = open.freeze();
        if !self.found_visible {
            if fragment.quoted || fragment.signature || fragment.content.trim().is_empty() {
                fragment.hidden = true;
            } else {
                self.found_visible = true;
            }
        }

        trace!(
            quoted = fragment.quoted,
            signature = fragment.signature,
            forwarded = fragment.forwarded,
            hidden = fragment.hidden,
            "Closed fragment of {} bytes",
            fragment.content.len()
        );

        self.closed.push(fragment);
    }
}
