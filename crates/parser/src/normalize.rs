//! Text Normalization
//!
//! Folds full-width forms to half-width before any pattern matching, so
//! `王小明　＋２` and `王小明 +2` parse the same way, and splits text into
//! lines on every line boundary a paste may carry.

use unicode_normalization::UnicodeNormalization;

/// Apply NFKC normalization to the whole text.
pub fn normalize(raw: &str) -> String {
    raw.nfkc().collect()
}

/// Whether `c` ends a line: `\n`, `\r`, vertical tab, form feed, the
/// file/group/record separators, NEL, and the Unicode line and paragraph
/// separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines. `\r\n` counts as one break.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
            chars.next();
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}
