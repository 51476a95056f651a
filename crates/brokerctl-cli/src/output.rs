//! Terminal output for pipeline progress and results.
//!
//! [`OutputManager`] is also the CLI's [`ProgressReporter`]: the core calls
//! it for stage headers, scaffolding results, and free-form notes.

use std::io;
use std::path::Path;

use console::Term;
use owo_colors::OwoColorize;
use tracing::warn;

use brokerctl_core::application::ports::ProgressReporter;
use brokerctl_core::domain::{ScaffoldResult, path_str};

use crate::cli::global::GlobalArgs;
use crate::config::AppConfig;

/// Manages CLI output based on flags and configuration.
#[derive(Debug, Clone)]
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        Self {
            quiet: args.quiet,
            no_color: args.no_color || config.output.no_color,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Always written, even in quiet mode.
    pub fn print_always(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Stage header: `-- <text>` in bold cyan.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let text = format!("-- {text}");
        let line = if self.no_color {
            text
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

/// Text for one scaffolded artifact.
fn scaffold_message(path: &Path, result: ScaffoldResult) -> String {
    match result {
        ScaffoldResult::Created => format!("file created: {}", path_str(path)),
        ScaffoldResult::AlreadyExists => format!("{} file exists already", path_str(path)),
    }
}

// The port has no error channel; a broken stdout only loses progress text.
impl ProgressReporter for OutputManager {
    fn stage(&self, title: &str) {
        if let Err(e) = self.header(title) {
            warn!(error = %e, "Failed to write stage header");
        }
    }

    fn scaffolded(&self, path: &Path, result: ScaffoldResult) {
        let msg = scaffold_message(path, result);
        let written = match result {
            ScaffoldResult::Created => self.success(&msg),
            ScaffoldResult::AlreadyExists => self.info(&msg),
        };
        if let Err(e) = written {
            warn!(error = %e, "Failed to report scaffolding result");
        }
    }

    fn note(&self, message: &str) {
        if let Err(e) = self.print(message) {
            warn!(error = %e, "Failed to write note");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
