//! Error types for srch-core operations.
//!
//! The scan pipeline has exactly three failure classes: a pattern that
//! does not compile, a named input that cannot be opened (fatal for the
//! whole run), and ordinary I/O failures while reading or writing.
//! Everything else either degrades silently (width counting) or is a
//! diagnostic-and-continue case handled inside [`crate::scan`].

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for srch-core operations.
///
/// [`Unreadable`](Error::Unreadable) is split out from plain I/O errors
/// because the scan driver treats it specially: the diagnostic has
/// already been written to the output sink when it is returned, so the
/// caller only maps it to an exit status.
#[derive(Error, Debug)]
pub enum Error {
    /// The search pattern failed to compile.
    #[error("invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A named input could not be opened for reading.
    #[error("could not read file: {}", path.display())]
    Unreadable {
        /// Path of the input that failed to open.
        path: PathBuf,
        /// The underlying open failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading a source or writing to the output sink failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_the_offending_path() {
        let err = Error::Unreadable {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.to_string(), "could not read file: missing.txt");
    }

    #[test]
    fn io_errors_convert_via_from() {
        let err: Error = std::io::Error::from(std::io::ErrorKind::BrokenPipe).into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn pattern_errors_convert_from_regex() {
        let err: Error = regex::Regex::new("(").unwrap_err().into();
        assert!(err.to_string().starts_with("invalid pattern"));
    }
}
