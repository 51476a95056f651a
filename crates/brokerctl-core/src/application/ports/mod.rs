//! Application ports (traits) for external dependencies.
//!
//! Ports define what the pipelines need from the outside world. Adapters in
//! `brokerctl-adapters` implement them; the CLI implements the reporter.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `ProcessRunner`: External tool invocations
//!   - `Filesystem`: File operations for config scaffolding
//!   - `ProgressReporter`: User-facing progress lines

pub mod output;

pub use output::{Filesystem, ProcessRunner, ProgressReporter, SilentReporter};

#[cfg(test)]
pub use output::{MockFilesystem, MockProcessRunner, MockProgressReporter};
