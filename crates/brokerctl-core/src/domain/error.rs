// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

use crate::domain::Command;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (errors travel through `Result`s held by test doubles)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("unknown command '{name}'")]
    UnknownCommand { name: String },

    #[error("invalid setting '{name}': {reason}")]
    InvalidSetting { name: &'static str, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnknownCommand { name } => vec![
                format!("'{}' is not a brokerctl command", name),
                format!(
                    "Available commands: {}",
                    Command::ALL
                        .iter()
                        .map(|c| c.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
            ],
            Self::InvalidSetting { name, .. } => vec![
                format!("Check the '{}' setting in brokerctl.toml", name),
                "Or override it with a BROKERCTL_<SECTION>__<KEY> environment variable".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownCommand { .. } => ErrorCategory::Validation,
            Self::InvalidSetting { .. } => ErrorCategory::Configuration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Configuration,
}
