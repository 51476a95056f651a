//! Core domain layer for brokerctl.
//!
//! Pure data and rules: which commands exist, what a build identity looks
//! like, how an external invocation is described, and what the scaffolded
//! configuration contains. No I/O happens here; everything that touches the
//! outside world goes through the ports in `crate::application::ports`.

pub mod command;
pub mod error;
pub mod invocation;
pub mod login_config;
pub mod version;
pub mod workspace;

pub use command::Command;
pub use error::{DomainError, ErrorCategory};
pub use invocation::{Invocation, OutputMode, ProcessOutput};
pub use login_config::{CloudFoundry, ConfigArtifact, Credentials, LoginConfig, ScaffoldResult};
pub use version::{COMMIT_SYMBOL, DEFAULT_VERSION, DIRTY_MARKER, VERSION_SYMBOL, VersionStamp};
pub use workspace::{DEFAULT_SPEC_URL, FailurePolicy, Toolchain, Workspace, path_str};
