//! ANSI highlighting and caret marker rendering.
//!
//! Both renderers take a `shift` that re-bases span offsets into the
//! coordinate space of the text being drawn: positive when a header
//! precedes the line, negative for wrapped chunks past the first.
//! Spans landing partly or wholly outside the text are clamped
//! silently.

use crate::matcher::MatchSpan;

/// SGR sequence that starts match highlighting (bold yellow).
pub const HIGHLIGHT_START: &str = "\x1b[1;33m";
/// SGR sequence that ends match highlighting.
pub const HIGHLIGHT_END: &str = "\x1b[0m";

/// Shift a span and clamp it to `[0, len]`.
///
/// Returns `None` when the shifted span lies entirely outside the text
/// (shifted end at or before 0, or shifted start at or past `len`).
fn clamp_span(span: MatchSpan, shift: isize, len: usize) -> Option<(usize, usize)> {
    let start = span.start as isize + shift;
    let end = span.end as isize + shift;
    if end <= 0 || start >= len as isize {
        return None;
    }
    let start = usize::try_from(start).unwrap_or(0);
    let end = usize::try_from(end).map_or(len, |e| e.min(len));
    Some((start, end))
}

/// Move `idx` down to the nearest character boundary of `text`.
///
/// Shifted offsets are byte counts and can land inside a multi-byte
/// sequence when the header contains non-ASCII file names; snapping
/// keeps insertion safe while staying a no-op on ASCII input.
fn align(text: &str, mut idx: usize) -> usize {
    while !text.is_char_boundary(idx) {
        idx -= 1;
    }
    idx
}

/// Count the characters of `text[start..end]`, falling back to the raw
/// byte count when the range is not a valid slice.
fn char_width(text: &str, start: usize, end: usize) -> usize {
    if end <= start {
        return 0;
    }
    text.get(start..end)
        .map_or(end - start, |slice| slice.chars().count())
}

/// Wrap every span of `text` in highlight markers.
///
/// Spans are applied in reverse order, rightmost first, so earlier
/// insertions do not move the offsets of spans still pending. With no
/// spans the text comes back unchanged.
///
/// # Examples
///
/// ```rust
/// use srch_core::{MatchSpan, highlight_spans};
///
/// let out = highlight_spans("a a", &[MatchSpan::new(0, 1), MatchSpan::new(2, 3)], 0);
/// assert_eq!(out, "\x1b[1;33ma\x1b[0m \x1b[1;33ma\x1b[0m");
/// ```
#[must_use]
pub fn highlight_spans(text: &str, spans: &[MatchSpan], shift: isize) -> String {
    let mut result = text.to_owned();
    for span in spans.iter().rev() {
        if let Some((start, end)) = clamp_span(*span, shift, text.len()) {
            let start = align(text, start);
            let end = align(text, end);
            result.insert_str(end, HIGHLIGHT_END);
            result.insert_str(start, HIGHLIGHT_START);
        }
    }
    result
}

/// Build a marker line for `text`: spaces everywhere except under a
/// match span, where one caret is drawn per matched character.
///
/// The line ends at the last caret; trailing text is not padded out.
/// Widths are counted in decoded characters with a raw-byte fallback
/// (see [`char_width`]).
///
/// # Examples
///
/// ```rust
/// use srch_core::{MatchSpan, marker_line};
///
/// assert_eq!(marker_line("   a ", &[MatchSpan::new(3, 4)], 0), "   ^");
/// ```
#[must_use]
pub fn marker_line(text: &str, spans: &[MatchSpan], shift: isize) -> String {
    let mut result = String::new();
    // Spans before this position were consumed by earlier chunks.
    let mut last = usize::try_from(shift).unwrap_or(0);
    for span in spans {
        if let Some((start, end)) = clamp_span(*span, shift, text.len()) {
            result.push_str(&" ".repeat(char_width(text, last, start)));
            result.push_str(&"^".repeat(char_width(text, start, end)));
            last = end;
        }
    }
    result
}
