//! Unified error handling for brokerctl core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for brokerctl core operations.
#[derive(Debug, Error, Clone)]
pub enum BrokerctlError {
    /// Errors from the domain layer (invalid commands or settings).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Errors from the application layer (pipeline failures).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl BrokerctlError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for a missing manifest or login config.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::PreconditionMissing { .. })
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    /// An external tool failed or could not be started.
    External,
    Internal,
}

/// Convenient result type alias.
pub type BrokerctlResult<T> = Result<T, BrokerctlError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::ConfigArtifact;

    #[test]
    fn wrapped_errors_keep_their_message() {
        let err: BrokerctlError = DomainError::UnknownCommand {
            name: "deploy".into(),
        }
        .into();
        assert_eq!(err.to_string(), "unknown command 'deploy'");
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn precondition_is_detected() {
        let err: BrokerctlError = ApplicationError::PreconditionMissing {
            artifact: ConfigArtifact::Manifest,
            path: PathBuf::from("./config/manifest.yml"),
        }
        .into();
        assert!(err.is_precondition());
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn invalid_setting_is_configuration() {
        let err: BrokerctlError = DomainError::InvalidSetting {
            name: "tools.go",
            reason: "must not be empty".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }
}
