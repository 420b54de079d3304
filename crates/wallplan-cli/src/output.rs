//! Output formatting and progress reporting

use clap::ValueEnum;
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};
use wallplan::Progress;

/// Output format for command results
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Status lines and build progress on stderr
#[derive(Debug)]
pub struct ProgressReporter {
    term: Term,
    progress_bar: Option<ProgressBar>,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl ProgressReporter {
    /// Create a new progress reporter
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            progress_bar: None,
            use_color,
            quiet,
        }
    }

    /// Start a progress bar over the bricks of a wall
    pub fn start_progress(&mut self, total: u64, message: &str) {
        if self.quiet {
            return;
        }

        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb.set_message(message.to_string());
        self.progress_bar = Some(pb);
    }

    /// Move the bar to the session's progress
    pub fn update(&self, progress: Progress) {
        if let Some(ref pb) = self.progress_bar {
            pb.set_position(progress.built as u64);
            pb.set_message(progress.to_string());
        }
    }

    /// Finish progress bar
    pub fn finish(&self) {
        if let Some(ref pb) = self.progress_bar {
            pb.finish_and_clear();
        }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.line(&self.prefix("✓", "OK", Tone::Green), message);
    }

    /// Print a warning message
    pub fn warning(&self, message: &str) {
        if self.quiet {
            return;
        }
        self.line(&self.prefix("⚠", "WARN", Tone::Yellow), message);
    }

    fn prefix(&self, symbol: &str, plain: &str, tone: Tone) -> String {
        if !self.use_color {
            return plain.to_string();
        }
        let styled = style(symbol).bold();
        let toned = match tone {
            Tone::Green => styled.green(),
            Tone::Yellow => styled.yellow(),
        };
        toned.to_string()
    }

    fn line(&self, prefix: &str, message: &str) {
        let _ = self.term.write_line(&format!("{prefix} {message}"));
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Green,
    Yellow,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_plain_prefixes() {
        let reporter = ProgressReporter::new(false, false);
        assert_eq!(reporter.prefix("✓", "OK", Tone::Green), "OK");
        assert_eq!(reporter.prefix("⚠", "WARN", Tone::Yellow), "WARN");
    }

    #[test]
    fn test_colored_prefix_keeps_symbol() {
        let reporter = ProgressReporter::new(true, false);
        assert!(reporter.prefix("✓", "OK", Tone::Green).contains('✓'));
    }

    #[test]
    fn test_quiet_reporter_has_no_bar() {
        let mut reporter = ProgressReporter::new(false, true);
        reporter.start_progress(10, "bricks");
        assert!(reporter.progress_bar.is_none());
        reporter.update(Progress { built: 5, total: 10 });
        reporter.finish();
    }
}
