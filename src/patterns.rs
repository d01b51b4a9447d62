//! Line classifiers shared by every parse.
//!
//! The scanner walks the body back to front, so every per-line pattern here is
//! written against reversed text: a line that *starts* with `>` in the email
//! *ends* with `>` by the time it reaches these matchers, and phrases such as
//! "Sent from my" appear spelled backwards.
//!
//! The multi-line header patterns are the exception. They run on the
//! forward-oriented text during normalization.

use crate::scanner::reverse;
use regex::Regex;
use std::sync::LazyLock;

/// Reply headers that mail clients wrap across several lines.
///
/// e.g. `On Aug 22, 2011, at 7:37 PM, defunkt<reply@reply.github.com> wrote:`
/// or `2013/11/13 John Smith <john@smith.org>`
pub static MULTI_LINE_REPLY_HEADERS: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?sm)^(On\s(?:.+)wrote:)$").unwrap(),
        Regex::new(r"(?sm)^(\d{4}/\d{2}/\d{2} .*<.+@.+>)$").unwrap(),
    ]
});

static SIGNATURE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?m)(--|__|\w-$)|(^(\w+\s*){{1,3}} {}$)",
        reverse("Sent from my")
    ))
    .unwrap()
});

static FORWARDED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?mi)^--+\s*{}\s*--+$",
        reverse("Forwarded message")
    ))
    .unwrap()
});

static QUOTED_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)(>+)$").unwrap());

static QUOTE_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^:etorw.*nO$|^>.*\d{2}/\d{2}/\d{4}$").unwrap()
});

/// Signature delimiters (`-- `, `__`), a trailing `-Name` sign-off, or a
/// mobile client's "Sent from my ..." footer.
pub fn is_signature_start(reversed_line: &str) -> bool {
    SIGNATURE_REGEX.is_match(reversed_line)
}

/// `---------- Forwarded message ----------` banners, any case.
pub fn is_forwarded(reversed_line: &str) -> bool {
    FORWARDED_REGEX.is_match(reversed_line)
}

/// Lines carrying a leading `>` quote marker.
pub fn is_quoted(reversed_line: &str) -> bool {
    QUOTED_REGEX.is_match(reversed_line)
}

/// Headers introducing a quoted block, e.g. `On <date>, <name> wrote:`.
///
/// Only meaningful on lines directly above a quoted region; Yahoo! emits
/// these without marking the quoted lines themselves.
pub fn is_quote_header(reversed_line: &str) -> bool {
    QUOTE_HEADER_REGEX.is_match(reversed_line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sig(line: &str) -> bool {
        is_signature_start(&reverse(line))
    }

    #[test]
    fn test_signature_delimiters() {
        assert!(sig("-- "));
        assert!(sig("--"));
        assert!(sig("______________"));
        assert!(sig("-Abhishek Kona"));
        assert!(sig("a correct -- signature"));
        // \w is Unicode-aware
        assert!(sig("-Élodie"));
        assert!(!sig("- a bullet point"));
        assert!(!sig("Regular sentence."));
        assert!(!sig(""));
    }

    #[test]
    fn test_signature_sent_from_my() {
        assert!(sig("Sent from my iPhone"));
        assert!(sig("Sent from my Windows Phone 8"));
        assert!(!sig("Sent from a magnificent torch of pixels"));
        assert!(!sig("Sent from my very very old little phone"));
    }

    #[test]
    fn test_forwarded_banner() {
        assert!(is_forwarded(&reverse("---------- Forwarded message ----------")));
        assert!(is_forwarded(&reverse("-- forwarded MESSAGE --")));
        assert!(!is_forwarded(&reverse("I forwarded the message to Bob")));
    }

    #[test]
    fn test_quoted_marker() {
        assert!(is_quoted(&reverse("> quoted")));
        assert!(is_quoted(&reverse(">> nested")));
        assert!(is_quoted(&reverse(">")));
        assert!(!is_quoted(&reverse("a > b")));
        assert!(!is_quoted(""));
    }

    #[test]
    fn test_quote_header() {
        assert!(is_quote_header(&reverse(
            "On 01/03/11 7:07 PM, Alice wrote:"
        )));
        assert!(is_quote_header(&reverse(
            "2013/11/13 John Smith <john@smith.org>"
        )));
        assert!(!is_quote_header(&reverse("She wrote:")));
        assert!(!is_quote_header(&reverse("On second thought, no.")));
    }

    #[test]
    fn test_multi_line_header_spans_lines() {
        let text = "On Dec 16, 2011, at 12:47 PM, Corey\n<reply@reply.github.com>\nwrote:\n";
        let caps = MULTI_LINE_REPLY_HEADERS[0].captures(text).unwrap();
        assert_eq!(
            &caps[1],
            "On Dec 16, 2011, at 12:47 PM, Corey\n<reply@reply.github.com>\nwrote:"
        );
    }
}
