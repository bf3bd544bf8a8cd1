//! Result record assembly and output.
//!
//! Two record formats exist, selected by [`SearchConfig::machine`]:
//!
//! - default: `<source> <line_number> <line_text>`
//! - machine: `<source>:<line_number>:<first_match_start>:<line_text>`
//!
//! The machine format records only the *first* match's start offset per
//! line. That is the historical contract; emitting one record per match
//! would break existing consumers and belongs behind a new flag.

use std::io::{self, Write};

use crate::config::SearchConfig;
use crate::matcher::MatchSpan;
use crate::render::{highlight_spans, marker_line};
use crate::wrap::wrap;

/// Write the result record(s) for one matching line to `out`.
///
/// `spans` must be the non-empty match set produced by
/// [`crate::find_matches`] for `line`; `lineno` is 1-based. In
/// underscore mode the header+line string is wrapped at
/// `config.wrap_width` and every chunk is followed by its caret marker
/// line; otherwise a single record line is written. Highlighting, when
/// enabled, combines with either shape.
pub fn write_result<W: Write>(
    out: &mut W,
    name: &str,
    lineno: u64,
    spans: &[MatchSpan],
    line: &str,
    config: &SearchConfig,
) -> io::Result<()> {
    debug_assert!(!spans.is_empty(), "formatter called without matches");

    let delimiter = if config.machine { ':' } else { ' ' };
    let mut header = format!("{name}{delimiter}{lineno}{delimiter}");
    if config.machine {
        let first_start = spans.first().map_or(0, |span| span.start);
        header.push_str(&format!("{first_start}{delimiter}"));
    }

    if config.underscore {
        // Shifts are byte-based, the marker pad is visual columns.
        let header_len = header.len();
        let header_width = header.chars().count();
        let full = format!("{header}{line}");

        for (k, chunk) in wrap(&full, config.wrap_width).iter().enumerate() {
            let shift = header_len as isize - chunk.offset as isize;
            let marker = marker_line(chunk.text, spans, shift);
            if config.color {
                let highlighted = highlight_spans(chunk.text, spans, shift);
                writeln!(out, "{}", highlighted.trim_matches('\n'))?;
            } else {
                writeln!(out, "{}", chunk.text.trim_matches('\n'))?;
            }
            if k == 0 {
                writeln!(out, "{}{}", " ".repeat(header_width), marker.trim_matches('\n'))?;
            } else {
                writeln!(out, "{}", marker.trim_matches('\n'))?;
            }
        }
    } else if config.color {
        writeln!(out, "{header}{}", highlight_spans(line, spans, 0))?;
    } else {
        writeln!(out, "{header}{line}")?;
    }

    Ok(())
}
