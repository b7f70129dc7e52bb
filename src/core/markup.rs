//! Minimal markup stripping for plain-label display.
//!
//! Dialog text arrives with a small HTML-ish vocabulary. Line-break tags are
//! turned into newlines and every other tag is dropped.

const LINE_BREAK_PREFIX: &str = "<br";

/// Strip `<...>` tags from `input`, converting `<br...>` tags to `\n`.
///
/// The `<br` prefix match is ASCII case-insensitive; other tags are removed
/// whatever their name. An unterminated tag swallows the rest of the input
/// rather than dropping only its `<` and keeping the remainder as text.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(ch) = rest.chars().next() {
        if ch != '<' {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        let Some(close) = rest.find('>') else {
            break;
        };

        if starts_with_line_break(rest) {
            out.push('\n');
        }
        rest = &rest[close + 1..];
    }

    out
}

fn starts_with_line_break(text: &str) -> bool {
    text.get(..LINE_BREAK_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(LINE_BREAK_PREFIX))
}
