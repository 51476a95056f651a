//! Application services - orchestrate use cases.
//!
//! Leaf-first: the version resolver and config scaffolder are used by the
//! pipeline runner, which the dispatcher drives.

pub mod config_scaffolder;
pub mod dispatcher;
pub mod pipeline_runner;
pub mod version_resolver;

pub use config_scaffolder::ConfigScaffolder;
pub use dispatcher::{Dispatch, Dispatcher};
pub use pipeline_runner::PipelineRunner;
pub use version_resolver::VersionResolver;
