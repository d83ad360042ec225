//! Content line folding for iCalendar (RFC 5545 §3.1).

/// Content line terminator.
pub const CRLF: &str = "\r\n";

/// Maximum physical line length in octets (not including CRLF).
pub const MAX_LINE_OCTETS: usize = 75;

/// Line break plus the single space that marks a continuation line.
const FOLD_MARKER: &str = "\r\n ";

/// Folds every CRLF-separated logical line of `document` independently.
///
/// Line terminators already in the document are kept as they are, including
/// a trailing one.
#[must_use]
pub fn fold(document: &str) -> String {
    document
        .split(CRLF)
        .map(fold_line)
        .collect::<Vec<_>>()
        .join(CRLF)
}

/// Folds a single logical line (without its terminator).
///
/// The first physical line holds up to 75 octets, continuation lines up to
/// 74 so that the leading space keeps them at 75. A character whose encoding
/// would overflow the current line moves whole to the next one.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + (line.len() / (MAX_LINE_OCTETS - 1)) * 3);
    let mut limit = MAX_LINE_OCTETS;
    let mut current = 0;

    for c in line.chars() {
        let width = c.len_utf8();
        if current > 0 && current + width > limit {
            result.push_str(FOLD_MARKER);
            // Continuation lines have one less octet available (the leading space)
            limit = MAX_LINE_OCTETS - 1;
            current = 0;
        }
        result.push(c);
        current += width;
    }

    log::trace!(
        "folded {}-octet line into {} physical lines",
        line.len(),
        result.matches(FOLD_MARKER).count() + 1
    );
    result
}

/// Reverses [`fold`]: removes every CRLF immediately followed by one space.
#[must_use]
pub fn unfold(text: &str) -> String {
    text.replace(FOLD_MARKER, "")
}
