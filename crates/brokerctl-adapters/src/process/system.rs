//! Process runner backed by `std::process::Command`.

use std::process::{Command, Stdio};

use tracing::debug;

use brokerctl_core::{
    application::{ApplicationError, ports::ProcessRunner},
    domain::{Invocation, OutputMode, ProcessOutput},
    error::BrokerctlResult,
};

/// Production runner: spawns the tool directly, without a shell, and waits
/// for it to exit.
///
/// Tools run in the current working directory, which is the checkout.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, invocation: &Invocation) -> BrokerctlResult<ProcessOutput> {
        let mut command = Command::new(&invocation.tool);
        command.args(&invocation.args);

        debug!(command = %invocation, mode = ?invocation.output, "Spawning");

        let spawn_failed = |e: std::io::Error| ApplicationError::SpawnFailed {
            command: invocation.to_string(),
            reason: e.to_string(),
        };

        match invocation.output {
            OutputMode::Inherit => {
                let status = command.status().map_err(spawn_failed)?;
                Ok(ProcessOutput {
                    exit_code: status.code(),
                    ..ProcessOutput::default()
                })
            }
            OutputMode::Capture => {
                let output = command
                    .stdin(Stdio::null())
                    .output()
                    .map_err(spawn_failed)?;
                Ok(ProcessOutput {
                    exit_code: output.status.code(),
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                })
            }
        }
    }
}
