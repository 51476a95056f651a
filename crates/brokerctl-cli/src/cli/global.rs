//! Global arguments that apply to every command.
//!
//! Declared here and flattened into [`super::Cli`] so that `-v`, `-q`, etc.
//! are available on any invocation without repetition

use clap::{Args, builder::FalseyValueParser};
use std::path::PathBuf;

use crate::logging::Verbosity;

/// Global arguments for all commands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Any `-v` also switches the pipelines to verbose mode.
    /// Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase verbosity:
    (none)  - Only warnings and errors
    -v      - Verbose pipelines (go test -v, echo build flags), info logs
    -vv     - Debug level (every external invocation)
    -vvv    - Trace level (very verbose)"
    )]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes.
    ///
    /// Honoured when `NO_COLOR` is set to any non-empty value other than a
    /// falsey word (`0`, `false`, `no`, `off`), see <https://no-color.org>.
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Configuration file path.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Configuration file path (default: ./brokerctl.toml)"
    )]
    pub config: Option<PathBuf>,
}

impl GlobalArgs {
    /// The pipelines only know "verbose or not".
    pub fn pipeline_verbose(&self) -> bool {
        Verbosity::from_args(self).pipeline_verbose()
    }
}
