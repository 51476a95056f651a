//! Command Dispatcher - maps a command name to exactly one pipeline.

use tracing::{info, instrument, warn};

use crate::{
    application::services::PipelineRunner, domain::Command, error::BrokerctlResult,
};

/// What the dispatcher did with the requested command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// No command, or one outside the known set. The caller shows usage;
    /// this is not a failure.
    Usage { unrecognized: Option<String> },
    /// The pipeline for this command ran to completion.
    Completed(Command),
}

/// Top-level entry point of the core.
pub struct Dispatcher {
    pipelines: PipelineRunner,
}

impl Dispatcher {
    pub fn new(pipelines: PipelineRunner) -> Self {
        Self { pipelines }
    }

    /// Resolve `command` and run its pipeline.
    ///
    /// An absent or unknown command issues no invocation at all and yields
    /// [`Dispatch::Usage`].
    #[instrument(skip(self))]
    pub fn dispatch(&self, command: Option<&str>, verbose: bool) -> BrokerctlResult<Dispatch> {
        let Some(name) = command else {
            return Ok(Dispatch::Usage { unrecognized: None });
        };

        let command = match name.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                warn!(error = %e, "Showing usage instead");
                return Ok(Dispatch::Usage {
                    unrecognized: Some(name.to_owned()),
                });
            }
        };

        self.execute(command, verbose)?;
        info!(%command, "Pipeline finished");
        Ok(Dispatch::Completed(command))
    }

    /// Run the pipeline for an already-parsed command.
    pub fn execute(&self, command: Command, verbose: bool) -> BrokerctlResult<()> {
        let pipelines = &self.pipelines;
        match command {
            Command::Build => pipelines.build(verbose),
            Command::Run => pipelines.run(verbose),
            Command::Test => pipelines.test(verbose),
            Command::Generate => pipelines.generate(verbose),
            Command::Config => pipelines.config(verbose).map(|_| ()),
            Command::Release => pipelines.release(verbose),
            Command::Login => pipelines.login(verbose),
            Command::Push => pipelines.push(verbose),
        }
    }
}
