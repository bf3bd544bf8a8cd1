//! Input source iteration and line scanning.
//!
//! Sources are processed strictly sequentially. A directory is a
//! diagnostic-and-continue case; an unopenable file aborts the whole
//! run after its diagnostic, so output never silently mixes complete
//! and partial results.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::format::write_result;
use crate::matcher::find_matches;

/// Display name used for standard input in diagnostics and records.
pub const STDIN_NAME: &str = "(standard input)";

/// One named input to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Standard input (`-` on the command line, or no files at all).
    Stdin,
    /// A file path.
    Path(PathBuf),
}

impl Source {
    /// Map a command-line token to a source; `-` denotes standard input.
    #[must_use]
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(arg))
        }
    }

    /// The name this source carries in output records and diagnostics.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => STDIN_NAME.to_owned(),
            Self::Path(path) => path.display().to_string(),
        }
    }
}

/// Strip every character outside printable ASCII and ASCII whitespace.
///
/// Applied to each line before matching and display. This is the
/// historical normalization and it is intentionally Unicode-hostile:
/// multi-byte text is corrupted by design, which is what keeps the
/// renderer's offset arithmetic on a single-byte character model.
#[must_use]
pub fn sanitize(line: &str) -> String {
    line.chars()
        .filter(|&c| c.is_ascii_graphic() || c.is_ascii_whitespace() || c == '\x0b')
        .collect()
}

/// Scan every source in order, writing result records to `out`.
///
/// Directories produce a diagnostic and the scan moves on; a source
/// that cannot be opened produces a diagnostic and aborts the run with
/// [`Error::Unreadable`]. Read failures mid-stream abort with
/// [`Error::Io`]. File handles are closed on every exit path.
pub fn run<W: Write>(sources: &[Source], config: &SearchConfig, out: &mut W) -> Result<()> {
    for source in sources {
        match source {
            Source::Stdin => {
                tracing::debug!("scanning standard input");
                let stdin = io::stdin();
                scan_reader(stdin.lock(), STDIN_NAME, config, out)?;
            },
            Source::Path(path) => {
                if path.is_dir() {
                    tracing::debug!(path = %path.display(), "skipping directory");
                    writeln!(out, "{} is a directory", path.display())?;
                    continue;
                }
                let file = match File::open(path) {
                    Ok(file) => file,
                    Err(err) => {
                        writeln!(out, "Could not read file: {}", path.display())?;
                        return Err(Error::Unreadable {
                            path: path.clone(),
                            source: err,
                        });
                    },
                };
                tracing::debug!(path = %path.display(), "scanning file");
                scan_reader(BufReader::new(file), &path.display().to_string(), config, out)?;
            },
        }
    }
    Ok(())
}

/// Scan one line source, emitting a record for every matching line.
///
/// Line numbers are 1-based and advance for non-matching lines too.
fn scan_reader<R: BufRead, W: Write>(
    reader: R,
    name: &str,
    config: &SearchConfig,
    out: &mut W,
) -> Result<()> {
    let mut matched = 0u64;
    for (idx, line) in reader.lines().enumerate() {
        let line = sanitize(&line?);
        let spans = find_matches(&line, &config.pattern);
        if !spans.is_empty() {
            write_result(out, name, idx as u64 + 1, &spans, &line, config)?;
            matched += 1;
        }
    }
    tracing::debug!(source = name, matched, "source exhausted");
    Ok(())
}
