//! The closed set of commands `brokerctl` understands.

use std::fmt;
use std::str::FromStr;

use crate::domain::DomainError;

/// A single user-issued command. Chosen once per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Build,
    Run,
    Test,
    Generate,
    Config,
    Release,
    Login,
    Push,
}

impl Command {
    /// Every command, in the order the usage summary lists them.
    pub const ALL: [Command; 8] = [
        Command::Build,
        Command::Run,
        Command::Test,
        Command::Generate,
        Command::Config,
        Command::Release,
        Command::Login,
        Command::Push,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Build => "build",
            Self::Run => "run",
            Self::Test => "test",
            Self::Generate => "generate",
            Self::Config => "config",
            Self::Release => "release",
            Self::Login => "login",
            Self::Push => "push",
        }
    }

    /// One-line description shown next to the command in the usage summary.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Build => "clean caches, format, and compile all packages with version info",
            Self::Run => "run the broker entry point with version info",
            Self::Test => "vet and test all packages",
            Self::Generate => "fetch the OpenAPI document and regenerate models",
            Self::Config => "create the deployment manifest and login config from templates",
            Self::Release => "release the broker (not implemented yet)",
            Self::Login => "log in to Cloud Foundry using the login config",
            Self::Push => "push the broker to Cloud Foundry with a rolling update",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Command {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::UnknownCommand { name: s.to_owned() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command_name() {
        for command in Command::ALL {
            assert_eq!(command.as_str().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Command::Generate.to_string(), "generate");
        assert_eq!(Command::Push.to_string(), "push");
    }

    #[test]
    fn unknown_name_is_error() {
        assert_eq!(
            "deploy".parse::<Command>(),
            Err(DomainError::UnknownCommand {
                name: "deploy".into()
            })
        );
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("Build".parse::<Command>().is_err());
    }
}
