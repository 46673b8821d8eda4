//! String literal quoting
//!
//! One fixed scheme, independent of the input:
//!
//! | character                      | written as           |
//! |--------------------------------|----------------------|
//! | `"`                            | `\"`                 |
//! | `\`                            | `\\`                 |
//! | LF, CR, TAB, BS, FF            | `\n` `\r` `\t` `\b` `\f` |
//! | other U+0000..=U+001F, U+007F  | `\u00xx` (lower hex) |
//! | U+2028, U+2029                 | `\u2028`, `\u2029`   |
//! | anything else                  | unchanged            |
//!
//! The delimiter is always `"`. Every escape above is valid in both
//! JavaScript and JSON string syntax, so the literal decodes identically in
//! either.

/// The string literal delimiter.
pub const QUOTE: char = '"';

/// Render `text` as a double-quoted string literal.
pub fn quote_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8 + 2);
    out.push(QUOTE);
    for ch in text.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_ascii_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push(QUOTE);
    out
}
