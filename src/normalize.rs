//! Text normalization ahead of scanning

use crate::patterns::MULTI_LINE_REPLY_HEADERS;

/// Canonicalize line endings and unwrap reply headers broken across lines.
///
/// Some clients (gmail for headers past 80 columns) wrap the
/// `On DATE, NAME <EMAIL> wrote:` line. For each known header shape the first
/// match has its line breaks removed so the scanner sees a single header line.
/// Later matches of the same shape are left as they are.
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut text = text.replace("\r\n", "\n");

    for header in MULTI_LINE_REPLY_HEADERS.iter() {
        let collapsed = header
            .captures(&text)
            .and_then(|caps| caps.get(1))
            .map(|m| (m.range(), m.as_str().replace('\n', "")));

        if let Some((range, collapsed)) = collapsed {
            text.replace_range(range, &collapsed);
        }
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_becomes_lf() {
        assert_eq!(normalize("Hi\r\n\r\nBye\r\n"), "Hi\n\nBye\n");
    }

    #[test]
    fn test_wrapped_on_wrote_header_is_joined() {
        let text = "Thanks!\n\nOn Dec 16, 2011, at 12:47 PM, Corey Donohoe\n<reply@reply.github.com>\nwrote:\n\n> Was this fixed?\n";
        assert_eq!(
            normalize(text),
            "Thanks!\n\nOn Dec 16, 2011, at 12:47 PM, Corey Donohoe<reply@reply.github.com>wrote:\n\n> Was this fixed?\n"
        );
    }

    #[test]
    fn test_wrapped_date_header_is_joined() {
        let text = "Sure.\n\n2013/11/13 John Smith\n<john@smith.org>\n> Can you?\n";
        assert_eq!(
            normalize(text),
            "Sure.\n\n2013/11/13 John Smith<john@smith.org>\n> Can you?\n"
        );
    }

    #[test]
    fn test_single_line_header_is_untouched() {
        let text = "Yes.\n\nOn 01/03/11 7:07 PM, Alice wrote:\n> Hi\n";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn test_only_first_wrapped_header_match_is_joined() {
        // The match runs from the first "On" to the last "wrote:", so the
        // quoted line between two wrapped headers is pulled onto one line.
        let text = "A\n\nOn x\nwrote:\n> q\n\nOn y\nwrote:\n> r\n";
        assert_eq!(normalize(text), "A\n\nOn xwrote:> qOn ywrote:\n> r\n");
    }

    #[test]
    fn test_text_without_headers_is_untouched() {
        let text = "Just a note.\nNothing quoted here.\n";
        assert_eq!(normalize(text), text);
    }
}
