//! Terminal output for progress and results.

use owo_colors::{OwoColorize, Stream};
use std::io::{self, Write};

/// Unicode markers used in front of status lines.
pub mod symbols {
    /// Success marker
    pub const SUCCESS: &str = "✓";
    /// Warning marker
    pub const WARNING: &str = "⚠";
    /// Progress marker
    pub const ARROW: &str = "→";
}

/// Writes user-facing progress to stdout and warnings to stderr.
///
/// Results (ids, JSON) are printed with [`OutputManager::result`] and are
/// never suppressed; everything else is silenced by `--quiet`.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    quiet: bool,
}

impl OutputManager {
    /// New output manager.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Progress line.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(
            io::stdout(),
            "{} {}",
            symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.cyan()),
            message
        )
    }

    /// Success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(
            io::stdout(),
            "{} {}",
            symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
            message
        )
    }

    /// Warning line on stderr.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(
            io::stderr(),
            "{} {}",
            symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
            message
        )
    }

    /// Section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        writeln!(
            io::stdout(),
            "{}",
            title.if_supports_color(Stream::Stdout, |s| s.bold())
        )
    }

    /// Indented `key: value` line.
    pub fn field(&self, key: &str, value: &str) -> io::Result<()> {
        writeln!(io::stdout(), "    {key}: {value}")
    }

    /// Indented line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        writeln!(io::stdout(), "    {message}")
    }

    /// Plain result line, printed even when quiet.
    pub fn result(&self, message: &str) -> io::Result<()> {
        writeln!(io::stdout(), "{message}")
    }
}
