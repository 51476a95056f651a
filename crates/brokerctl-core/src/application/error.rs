//! Application layer errors.
//!
//! These errors represent failures while orchestrating external tools and
//! files, not rule violations. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ConfigArtifact;
use crate::error::ErrorCategory;

/// Errors that occur while running a pipeline.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A pipeline needs a scaffolded file that does not exist yet.
    #[error("{artifact} not found at {path}: run the `config` command to create it")]
    PreconditionMissing {
        artifact: ConfigArtifact,
        path: PathBuf,
    },

    /// The login config exists but is not well-formed.
    #[error("Failed to parse {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// Source control could not tell us the build identity.
    #[error("Version resolution failed: {reason}")]
    VersionResolution { reason: String },

    /// An external tool ran and exited unsuccessfully.
    #[error("`{command}` {}", describe_exit(.exit_code))]
    ExternalInvocationFailed {
        command: String,
        exit_code: Option<i32>,
    },

    /// An external tool could not be started at all.
    #[error("Failed to start `{command}`: {reason}")]
    SpawnFailed { command: String, reason: String },

    /// The template a config file is copied from is missing.
    #[error("{artifact} template not found at {path}")]
    TemplateMissing {
        artifact: ConfigArtifact,
        path: PathBuf,
    },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared state of an adapter was poisoned.
    #[error("Adapter state lock poisoned")]
    StoreLockError,
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {code}"),
        None => "was terminated by a signal".into(),
    }
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::PreconditionMissing { artifact, path } => vec![
                format!("The {} is missing: {}", artifact, path.display()),
                "Create it with: brokerctl config".into(),
                "Then edit the generated file and retry".into(),
            ],
            Self::ConfigParse { path, .. } => vec![
                format!("Fix the YAML in {}", path.display()),
                "Expected keys: cloud-foundry.api-url, cloud-foundry.login.{user,password,org,space}"
                    .into(),
                format!(
                    "Or delete {} and run 'brokerctl config' to start over",
                    path.display()
                ),
            ],
            Self::VersionResolution { .. } => vec![
                "Make sure brokerctl runs inside a git checkout".into(),
                "Check that git is installed and in your PATH".into(),
            ],
            Self::ExternalInvocationFailed { .. } => vec![
                "Check the tool output above for details".into(),
                "Use --keep-going to continue past failing steps".into(),
            ],
            Self::SpawnFailed { .. } => vec![
                "Ensure the command is installed and in your PATH".into(),
                "Tool names can be overridden in the [tools] section of brokerctl.toml".into(),
            ],
            Self::TemplateMissing { path, .. } => vec![
                format!("Expected a template at {}", path.display()),
                "Run brokerctl from the repository root".into(),
                "Or point paths.template_dir at the template directory".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::StoreLockError => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PreconditionMissing { .. } | Self::TemplateMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::ConfigParse { .. } => ErrorCategory::Configuration,
            Self::VersionResolution { .. } => ErrorCategory::External,
            Self::ExternalInvocationFailed { .. } | Self::SpawnFailed { .. } => {
                ErrorCategory::External
            }
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
