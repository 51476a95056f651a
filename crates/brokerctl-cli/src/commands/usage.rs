//! Usage text shown for an absent or unknown command.

use clap::CommandFactory;
use tracing::warn;

use crate::cli::{Cli, command_help};
use crate::error::{CliResult, IntoCli};
use crate::output::OutputManager;

/// Usage line followed by the command list.
pub fn render(unrecognized: Option<&str>) -> String {
    let mut text = String::new();
    if let Some(name) = unrecognized {
        text.push_str(&format!("unknown command '{name}'\n\n"));
    }
    text.push_str(&Cli::command().render_usage().to_string());
    text.push_str("\n\nCommands:\n");
    text.push_str(&command_help());
    text.push_str("\n\nSee 'brokerctl --help' for all options.");
    text
}

/// Print usage to stdout; shown even with `--quiet`.
pub fn execute(unrecognized: Option<&str>, output: &OutputManager) -> CliResult<()> {
    if let Some(name) = unrecognized {
        warn!(command = name, "Unknown command, showing usage");
    }
    output
        .print_always(&render(unrecognized))
        .with_cli_context(|| "writing usage")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_lists_every_command() {
        let text = render(None);
        assert!(text.starts_with("Usage:"));
        for name in ["build", "run", "test", "generate", "config", "release", "login", "push"] {
            assert!(text.contains(name), "missing {name}");
        }
    }

    #[test]
    fn usage_names_unknown_command() {
        let text = render(Some("deploy"));
        assert!(text.starts_with("unknown command 'deploy'"));
        assert!(text.contains("Usage:"));
    }
}
