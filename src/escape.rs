//! Text escaping for quoted notation strings.
//!
//! Ten characters are replaced by a backslash escape; everything else,
//! including non-ASCII text, is copied through untouched:
//!
//! | char | escape |
//! |------|--------|
//! | NUL | `\0` |
//! | backspace | `\b` |
//! | tab | `\t` |
//! | carriage return | `\r` |
//! | line feed | `\n` |
//! | vertical tab | `\v` |
//! | form feed | `\f` |
//! | `"` | `\"` |
//! | `'` | `\'` |
//! | `\` | `\\` |
//!
//! Escaping is not idempotent. Escaping already-escaped text doubles every
//! backslash, so raw values must be escaped exactly once.
//!
//! ```rust
//! use serde_jsnotation::escape;
//!
//! assert_eq!(escape("plain"), "plain");
//! assert_eq!(escape("it's \"quoted\""), r#"it\'s \"quoted\""#);
//! assert_eq!(escape(&escape("a\\b")), r"a\\\\b");
//! ```

/// Returns the two-character escape for `ch`, if it needs one.
#[inline]
fn escape_for(ch: char) -> Option<&'static str> {
    match ch {
        '\0' => Some("\\0"),
        '\u{0008}' => Some("\\b"),
        '\t' => Some("\\t"),
        '\r' => Some("\\r"),
        '\n' => Some("\\n"),
        '\u{000B}' => Some("\\v"),
        '\u{000C}' => Some("\\f"),
        '"' => Some("\\\""),
        '\'' => Some("\\'"),
        '\\' => Some("\\\\"),
        _ => None,
    }
}

/// Escapes `text` into a new string.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

/// Appends the escaped form of `text` to `out`.
///
/// Runs of characters that need no escaping are copied as whole slices.
pub fn escape_into(out: &mut String, text: &str) {
    let mut start = 0;
    for (i, ch) in text.char_indices() {
        if let Some(esc) = escape_for(ch) {
            out.push_str(&text[start..i]);
            out.push_str(esc);
            start = i + ch.len_utf8();
        }
    }
    out.push_str(&text[start..]);
}

/// Appends `text` as a quoted, escaped string literal.
#[inline]
pub(crate) fn write_quoted(out: &mut String, text: &str) {
    out.push('"');
    escape_into(out, text);
    out.push('"');
}
