//! CLI structure and argument parsing.
//!
//! The surface is deliberately small: one pattern, zero or more files,
//! three annotation flags, and a handful of global switches. `-` as a
//! file name denotes standard input, as does giving no files at all.

use clap::Parser;

/// Command-line arguments for `srch`.
#[derive(Parser, Debug)]
#[command(name = "srch")]
#[command(version)]
#[command(about = "Line-oriented regex search with match annotation", long_about = None)]
pub struct Cli {
    /// The pattern to find
    #[arg(value_name = "PATTERN")]
    pub pattern: String,

    /// The file(s) to search; '-' or no files reads standard input
    #[arg(value_name = "FILES")]
    pub files: Vec<String>,

    /// Print '^' markers under the matching text
    #[arg(short, long)]
    pub underscore: bool,

    /// Highlight matching text
    #[arg(short, long)]
    pub color: bool,

    /// Generate machine readable output
    #[arg(short, long)]
    pub machine: bool,

    /// Wrap underscored output at COLS instead of the terminal width
    #[arg(long, value_name = "COLS")]
    pub width: Option<usize>,

    /// Enable verbose logging output
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn pattern_is_required() {
        assert!(Cli::try_parse_from(["srch"]).is_err());
        assert!(Cli::try_parse_from(["srch", "-u", "-m", "-c"]).is_err());
    }

    #[test]
    fn unknown_flags_are_rejected() {
        assert!(Cli::try_parse_from(["srch", "-k", "a", "-"]).is_err());
    }

    #[test]
    fn files_default_to_empty() {
        let cli = Cli::try_parse_from(["srch", "a"]).unwrap();
        assert!(cli.files.is_empty());
        assert!(!cli.underscore && !cli.color && !cli.machine);
    }

    #[test]
    fn flags_and_files_parse_together() {
        let cli = Cli::try_parse_from(["srch", "-u", "-c", "-m", "a", "x.txt", "-"]).unwrap();
        assert!(cli.underscore && cli.color && cli.machine);
        assert_eq!(cli.files, vec!["x.txt", "-"]);
    }

    #[test]
    fn width_override_parses() {
        let cli = Cli::try_parse_from(["srch", "--width", "40", "a"]).unwrap();
        assert_eq!(cli.width, Some(40));
    }
}
