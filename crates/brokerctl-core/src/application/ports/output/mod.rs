//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `brokerctl-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Invocation, ProcessOutput, ScaffoldResult};
use crate::error::BrokerctlResult;

/// Port for running external tools.
///
/// Implemented by:
/// - `brokerctl_adapters::process::SystemProcessRunner` (production)
/// - `brokerctl_adapters::process::RecordingRunner` (testing)
///
/// ## Design Notes
///
/// - Blocks until the child exits; there is no timeout.
/// - Returns `Err` only when the tool could not be started. A non-zero exit
///   is a successful `run` with a failing [`ProcessOutput`]; deciding what
///   that means is the caller's job.
#[cfg_attr(test, mockall::automock)]
pub trait ProcessRunner: Send + Sync {
    fn run(&self, invocation: &Invocation) -> BrokerctlResult<ProcessOutput>;
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `brokerctl_adapters::filesystem::LocalFilesystem` (production)
/// - `brokerctl_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> BrokerctlResult<()>;

    /// Copy `from` to `to` byte for byte, replacing `to`.
    fn copy_file(&self, from: &Path, to: &Path) -> BrokerctlResult<()>;

    /// Read a UTF-8 file.
    fn read_to_string(&self, path: &Path) -> BrokerctlResult<String>;
}

/// Port for user-facing progress output.
#[cfg_attr(test, mockall::automock)]
pub trait ProgressReporter: Send + Sync {
    /// A pipeline (or a phase of one) is starting.
    fn stage(&self, title: &str);

    /// A config artifact was scaffolded or left alone.
    fn scaffolded(&self, path: &Path, result: ScaffoldResult);

    /// Free-form informational line.
    fn note(&self, message: &str);
}

/// Reporter that drops everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn stage(&self, _title: &str) {}

    fn scaffolded(&self, _path: &Path, _result: ScaffoldResult) {}

    fn note(&self, _message: &str) {}
}
