//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text.  No business logic lives here.

use clap::Parser;

use brokerctl_core::domain::Command;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "brokerctl",
    bin_name = "brokerctl",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Build, generate, and deploy the lookup service broker",
    long_about = "brokerctl sequences the Go toolchain, the OpenAPI generator, \
                  and the Cloud Foundry CLI for the lookup service broker.",
    after_help = "EXAMPLES:\n\
        \x20 brokerctl -v test\n\
        \x20 brokerctl build\n\
        \x20 brokerctl config && brokerctl login && brokerctl push\n\
        \x20 brokerctl --keep-going generate",
)]
pub struct Cli {
    /// Flags available on every command.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Keep running a pipeline after an external step fails.
    #[arg(
        long = "keep-going",
        help = "Continue past failing external steps instead of stopping"
    )]
    pub keep_going: bool,

    /// Command to execute.
    ///
    /// Kept as a plain string: an unknown command shows usage instead of
    /// failing argument parsing.
    #[arg(
        value_name = "COMMAND",
        help = "Command to execute (omit to show usage)",
        long_help = command_help()
    )]
    pub command: Option<String>,
}

impl Cli {
    /// The command to run, or `None` when the invocation only asks for usage.
    ///
    /// An unknown name is not an error here; it is reported alongside the
    /// usage text.
    pub fn pipeline_command(&self) -> Option<Command> {
        self.command.as_deref()?.parse().ok()
    }
}

/// Every command with its one-line summary, aligned.
pub fn command_help() -> String {
    let width = Command::ALL
        .iter()
        .map(|c| c.as_str().len())
        .max()
        .unwrap_or(0);
    Command::ALL
        .iter()
        .map(|c| format!("  {:<width$}  {}", c.as_str(), c.summary()))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        // catches conflicting or malformed argument definitions
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_command_with_verbose() {
        let cli = Cli::parse_from(["brokerctl", "-v", "test"]);
        assert_eq!(cli.command.as_deref(), Some("test"));
        assert!(cli.global.pipeline_verbose());
    }

    #[test]
    fn verbose_after_command() {
        let cli = Cli::parse_from(["brokerctl", "build", "--verbose"]);
        assert_eq!(cli.command.as_deref(), Some("build"));
        assert_eq!(cli.global.verbose, 1);
    }

    #[test]
    fn command_is_optional() {
        let cli = Cli::parse_from(["brokerctl"]);
        assert!(cli.command.is_none());
        assert!(!cli.global.pipeline_verbose());
    }

    #[test]
    fn unknown_command_still_parses() {
        let cli = Cli::parse_from(["brokerctl", "deploy"]);
        assert_eq!(cli.command.as_deref(), Some("deploy"));
    }

    #[test]
    fn only_known_names_select_a_pipeline() {
        let cli = Cli::parse_from(["brokerctl", "push"]);
        assert_eq!(cli.pipeline_command(), Some(Command::Push));

        assert_eq!(Cli::parse_from(["brokerctl"]).pipeline_command(), None);
        assert_eq!(Cli::parse_from(["brokerctl", "Push"]).pipeline_command(), None);
    }

    #[test]
    fn no_color_flag() {
        let cli = Cli::parse_from(["brokerctl", "--no-color", "release"]);
        assert!(cli.global.no_color);
    }

    #[test]
    fn keep_going_flag() {
        let cli = Cli::parse_from(["brokerctl", "--keep-going", "generate"]);
        assert!(cli.keep_going);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["brokerctl", "--quiet", "--verbose", "test"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_help_lists_every_command() {
        let help = command_help();
        for command in Command::ALL {
            assert!(help.contains(command.as_str()), "missing {command}");
        }
    }
}
