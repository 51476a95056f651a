//! Application layer for brokerctl.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (Dispatcher, PipelineRunner,
//!   VersionResolver, ConfigScaffolder)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{ConfigScaffolder, Dispatch, Dispatcher, PipelineRunner, VersionResolver};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ProcessRunner, ProgressReporter, SilentReporter};

pub use error::ApplicationError;
