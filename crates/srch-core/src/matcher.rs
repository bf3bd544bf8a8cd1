//! Match span discovery.
//!
//! All offsets are byte offsets into the searched line. Lines reaching
//! this module have been sanitized to ASCII (see [`crate::scan`]), so
//! byte offsets coincide with character positions.

use regex::Regex;

/// Half-open range of one pattern match within a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MatchSpan {
    /// Offset of the first matched byte.
    pub start: usize,
    /// Offset one past the last matched byte.
    pub end: usize,
}

impl MatchSpan {
    /// Create a span. `end` must be at least `start`.
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered by the span.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no bytes (a zero-length match).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Find all non-overlapping matches of `pattern` in `line`, left to
/// right.
///
/// Uses leftmost-first semantics: after each match the scan resumes at
/// the match end. Zero-length matches are reported too; the underlying
/// iterator advances past them, so patterns like `a*` terminate.
///
/// Returns an empty vector when nothing matches.
#[must_use]
pub fn find_matches(line: &str, pattern: &Regex) -> Vec<MatchSpan> {
    pattern
        .find_iter(line)
        .map(|m| MatchSpan::new(m.start(), m.end()))
        .collect()
}
