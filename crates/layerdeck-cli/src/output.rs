//! Status line output

use console::{style, Term};

/// Writes status lines to stderr, styled when colors are on
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter {
    /// Create a new reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(&self.line("✓", "OK", message, Tone::Good));
    }

    /// Print a failure message, even in quiet mode
    pub fn failure(&self, message: &str) {
        let _ = self.term.write_line(&self.line("✗", "FAIL", message, Tone::Bad));
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if self.quiet {
            return;
        }
        let _ = self.term.write_line(&self.line("ℹ", "INFO", message, Tone::Neutral));
    }

    fn line(&self, symbol: &str, plain: &str, message: &str, tone: Tone) -> String {
        let prefix = if self.use_color {
            match tone {
                Tone::Good => style(symbol).green().bold().to_string(),
                Tone::Bad => style(symbol).red().bold().to_string(),
                Tone::Neutral => style(symbol).blue().bold().to_string(),
            }
        } else {
            plain.to_string()
        };
        format!("{prefix} {message}")
    }
}

#[derive(Debug, Clone, Copy)]
enum Tone {
    Good,
    Bad,
    Neutral,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_prefixes() {
        let reporter = Reporter::new(false, false);
        assert_eq!(reporter.line("✓", "OK", "done", Tone::Good), "OK done");
        assert_eq!(reporter.line("✗", "FAIL", "oops", Tone::Bad), "FAIL oops");
    }

    #[test]
    fn test_colored_prefix_keeps_message() {
        let reporter = Reporter::new(true, false);
        assert!(reporter.line("ℹ", "INFO", "note", Tone::Neutral).ends_with(" note"));
    }
}
