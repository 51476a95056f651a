//! Tracing set-up for the `brokerctl` binary.
//!
//! The core and adapters crates only emit events. The subscriber installed
//! here writes them to stderr, so stdout carries nothing but stage headers,
//! scaffolding results, and usage text.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// How much a run reports, from `-q` and the `-v` count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    /// `-v`: verbose pipelines plus info events.
    Verbose,
    /// `-vv`: every step the core runs.
    Debug,
    /// `-vvv`: every spawn in the adapters as well.
    Trace,
}

impl Verbosity {
    pub fn from_args(args: &GlobalArgs) -> Self {
        if args.quiet {
            return Self::Quiet;
        }
        match args.verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// `go test -v` and the echoed build flags start at `-v`.
    pub fn pipeline_verbose(self) -> bool {
        self >= Self::Verbose
    }

    /// Level for the binary and the core.
    fn level(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// The adapters log each spawn at debug, repeating the core's step
    /// event; they trail the core by one level until `-vvv`.
    fn adapters_level(self) -> &'static str {
        match self {
            Self::Debug => "info",
            other => other.level(),
        }
    }

    /// Filter directives used when `RUST_LOG` is unset.
    fn directives(self) -> String {
        let level = self.level();
        format!(
            "brokerctl={level},brokerctl_core={level},brokerctl_adapters={}",
            self.adapters_level()
        )
    }
}

/// ANSI escapes only for an interactive stderr and without `--no-color`.
fn use_ansi(no_color: bool, stderr_is_terminal: bool) -> bool {
    !no_color && stderr_is_terminal
}

/// Install the global subscriber; call once, before the first event.
///
/// `RUST_LOG` replaces the verbosity-derived filter entirely.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let verbosity = Verbosity::from_args(args);
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directives()));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_ansi(use_ansi(args.no_color, std::io::stderr().is_terminal()))
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
        }
    }

    #[test]
    fn flags_map_to_verbosity() {
        assert_eq!(Verbosity::from_args(&args(0, true)), Verbosity::Quiet);
        assert_eq!(Verbosity::from_args(&args(0, false)), Verbosity::Normal);
        assert_eq!(Verbosity::from_args(&args(1, false)), Verbosity::Verbose);
        assert_eq!(Verbosity::from_args(&args(2, false)), Verbosity::Debug);
        assert_eq!(Verbosity::from_args(&args(7, false)), Verbosity::Trace);
    }

    #[test]
    fn pipelines_turn_verbose_from_one_v() {
        assert!(!Verbosity::Quiet.pipeline_verbose());
        assert!(!Verbosity::Normal.pipeline_verbose());
        assert!(Verbosity::Verbose.pipeline_verbose());
        assert!(Verbosity::Trace.pipeline_verbose());
    }

    #[test]
    fn default_run_only_shows_warnings() {
        assert_eq!(
            Verbosity::Normal.directives(),
            "brokerctl=warn,brokerctl_core=warn,brokerctl_adapters=warn"
        );
    }

    #[test]
    fn spawn_events_wait_for_trace() {
        assert_eq!(
            Verbosity::Debug.directives(),
            "brokerctl=debug,brokerctl_core=debug,brokerctl_adapters=info"
        );
        assert!(Verbosity::Trace.directives().ends_with("brokerctl_adapters=trace"));
    }

    #[test]
    fn quiet_keeps_errors() {
        assert!(
            Verbosity::Quiet
                .directives()
                .split(',')
                .all(|d| d.ends_with("=error"))
        );
    }

    #[test]
    fn directives_parse_as_a_filter() {
        for v in [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Debug,
            Verbosity::Trace,
        ] {
            assert!(EnvFilter::try_new(v.directives()).is_ok(), "{v:?}");
        }
    }

    #[test]
    fn ansi_needs_a_terminal_and_no_opt_out() {
        assert!(use_ansi(false, true));
        assert!(!use_ansi(true, true));
        assert!(!use_ansi(false, false));
    }
}
