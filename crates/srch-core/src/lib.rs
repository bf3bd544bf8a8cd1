//! # srch-core
//!
//! Core functionality for srch - a line-oriented regular expression search
//! tool with match annotation.
//!
//! This crate implements the whole match/render pipeline: finding match
//! spans in a line, highlighting them, drawing caret marker lines under
//! wrapped terminal output, formatting result records, and driving a
//! sequential scan over input sources. The CLI crate is a thin wrapper
//! that parses arguments, detects the terminal width, and hands a
//! [`SearchConfig`] plus a list of [`Source`]s to [`run`].
//!
//! ## Architecture
//!
//! The pipeline is composed of independent, stateless pieces sharing an
//! immutable configuration:
//!
//! - [`matcher`]: all non-overlapping match spans for one line
//! - [`render`]: ANSI highlighting and caret marker lines
//! - [`wrap`]: terminal-width chunking for underscored output
//! - [`format`]: assembles result records and writes them to a sink
//! - [`scan`]: sequential iteration over files and standard input
//!
//! ## Quick Start
//!
//! ```rust
//! use srch_core::{SearchConfig, find_matches, write_result};
//!
//! let config = SearchConfig::new("b+")?;
//! let line = "abba";
//! let spans = find_matches(line, &config.pattern);
//! assert_eq!(spans.len(), 1);
//!
//! let mut out = Vec::new();
//! write_result(&mut out, "notes.txt", 7, &spans, line, &config)?;
//! assert_eq!(String::from_utf8_lossy(&out), "notes.txt 7 abba\n");
//! # Ok::<(), srch_core::Error>(())
//! ```
//!
//! ## Text model
//!
//! Input lines are sanitized to printable ASCII plus whitespace before
//! matching (see [`scan::sanitize`]), so span offsets are byte offsets
//! that coincide with character positions. The render layer still counts
//! visual widths in decoded characters, degrading to raw byte counts
//! when a slice boundary is not a character boundary, because it also
//! handles headers containing arbitrary file names.

/// Immutable search configuration shared across the pipeline
pub mod config;
/// Error types and result alias
pub mod error;
/// Result record assembly and output
pub mod format;
/// Match span discovery
pub mod matcher;
/// ANSI highlighting and caret marker rendering
pub mod render;
/// Input source iteration and line scanning
pub mod scan;
/// Terminal-width line chunking
pub mod wrap;

pub use config::{DEFAULT_WRAP_WIDTH, SearchConfig};
pub use error::{Error, Result};
pub use format::write_result;
pub use matcher::{MatchSpan, find_matches};
pub use render::{HIGHLIGHT_END, HIGHLIGHT_START, highlight_spans, marker_line};
pub use scan::{Source, run, sanitize};
pub use wrap::{Chunk, wrap};
