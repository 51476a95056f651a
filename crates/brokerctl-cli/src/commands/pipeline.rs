//! Run the pipeline selected on the command line.

use tracing::{debug, instrument};

use brokerctl_adapters::{LocalFilesystem, SystemProcessRunner};
use brokerctl_core::application::{Dispatcher, PipelineRunner};
use brokerctl_core::domain::Command;
use brokerctl_core::error::BrokerctlError;

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::CliResult;
use crate::output::OutputManager;

/// Validate the resolved workspace, then hand the command to the core.
#[instrument(skip(cli, config, output))]
pub fn execute(
    command: Command,
    cli: &Cli,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let workspace = config.to_workspace(cli.keep_going);
    workspace.validate().map_err(BrokerctlError::from)?;
    debug!(?workspace, "Workspace resolved");

    let pipelines = PipelineRunner::new(
        Box::new(SystemProcessRunner::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(output),
        workspace,
    );
    let dispatcher = Dispatcher::new(pipelines);

    dispatcher.execute(command, cli.global.pipeline_verbose())?;
    debug!(%command, "Command completed");
    Ok(())
}
