//! brokerctl Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for `brokerctl`,
//! the build and release tool of the lookup service broker.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          brokerctl-cli (CLI)            │
//! │   (args, config, logging, exit codes)   │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   Dispatcher → PipelineRunner →         │
//! │   VersionResolver / ConfigScaffolder    │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (ProcessRunner, Filesystem, Reporter)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    brokerctl-adapters (Infrastructure)  │
//! │ (SystemProcessRunner, LocalFilesystem)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use brokerctl_core::prelude::*;
//! # fn adapters() -> (Box<dyn ProcessRunner>, Box<dyn Filesystem>) { unimplemented!() }
//!
//! let (runner, filesystem) = adapters();
//! let pipelines = PipelineRunner::new(
//!     runner,
//!     filesystem,
//!     Box::new(SilentReporter),
//!     Workspace::default(),
//! );
//! let dispatcher = Dispatcher::new(pipelines);
//! dispatcher.dispatch(Some("test"), true).unwrap();
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ConfigScaffolder, Dispatch, Dispatcher, PipelineRunner, VersionResolver,
        ports::{Filesystem, ProcessRunner, ProgressReporter, SilentReporter},
    };
    pub use crate::domain::{
        Command, ConfigArtifact, FailurePolicy, Invocation, LoginConfig, OutputMode,
        ProcessOutput, ScaffoldResult, Toolchain, VersionStamp, Workspace,
    };
    pub use crate::error::{BrokerctlError, BrokerctlResult};
}
