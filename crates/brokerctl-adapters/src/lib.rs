//! Infrastructure adapters for brokerctl.
//!
//! This crate implements the ports defined in `brokerctl-core::application::ports`.
//! It contains all process spawning and filesystem I/O.

pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::{RecordingRunner, SystemProcessRunner};
