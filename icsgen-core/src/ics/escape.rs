//! TEXT value escaping (RFC 5545 §3.3.11).

/// Escapes backslash, semicolon, comma and newline in a TEXT value.
///
/// Backslashes are handled in the same pass as everything else, so the
/// backslash introduced by an escape is never escaped again. No other
/// character is touched.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            _ => result.push(c),
        }
    }
    result
}
