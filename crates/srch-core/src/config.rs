//! Immutable search configuration.

use regex::Regex;

use crate::error::Result;

/// Configuration for one search run.
///
/// Built once from parsed CLI arguments and passed by reference through
/// the whole pipeline; nothing mutates it after construction.
///
/// # Examples
///
/// ```rust
/// use srch_core::SearchConfig;
///
/// let config = SearchConfig::new(r"\d+")?.with_machine(true);
/// assert!(config.machine);
/// assert!(!config.underscore);
/// # Ok::<(), srch_core::Error>(())
/// ```
#[derive(Debug)]
pub struct SearchConfig {
    /// Compiled search pattern.
    pub pattern: Regex,
    /// Emit a caret marker line under each output line.
    pub underscore: bool,
    /// Highlight matched text with ANSI SGR sequences.
    pub color: bool,
    /// Emit `name:line:offset:text` records instead of the default format.
    pub machine: bool,
    /// Column count used to wrap underscored output.
    pub wrap_width: usize,
}

/// Wrap width used when the terminal size cannot be determined.
pub const DEFAULT_WRAP_WIDTH: usize = 80;

impl SearchConfig {
    /// Compile `pattern` and assemble a configuration with all
    /// annotation modes off and the default wrap width.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            underscore: false,
            color: false,
            machine: false,
            wrap_width: DEFAULT_WRAP_WIDTH,
        })
    }

    /// Enable or disable the caret marker line.
    #[must_use]
    pub fn with_underscore(mut self, underscore: bool) -> Self {
        self.underscore = underscore;
        self
    }

    /// Enable or disable ANSI highlighting.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Enable or disable the machine-readable record format.
    #[must_use]
    pub fn with_machine(mut self, machine: bool) -> Self {
        self.machine = machine;
        self
    }

    /// Set the wrap width for underscored output.
    ///
    /// Values below 1 are clamped to 1; a zero-width terminal would
    /// otherwise make the wrapper spin without consuming input.
    #[must_use]
    pub fn with_wrap_width(mut self, wrap_width: usize) -> Self {
        self.wrap_width = wrap_width.max(1);
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_plain_output_at_default_width() {
        let config = SearchConfig::new("a").unwrap();
        assert!(!config.underscore);
        assert!(!config.color);
        assert!(!config.machine);
        assert_eq!(config.wrap_width, DEFAULT_WRAP_WIDTH);
    }

    #[test]
    fn invalid_pattern_is_rejected_at_construction() {
        assert!(SearchConfig::new("[unclosed").is_err());
    }

    #[test]
    fn wrap_width_is_clamped_to_at_least_one() {
        let config = SearchConfig::new("a").unwrap().with_wrap_width(0);
        assert_eq!(config.wrap_width, 1);
    }
}
