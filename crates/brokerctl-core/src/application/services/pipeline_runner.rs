//! Pipeline Runner - the ordered external steps behind each command.
//!
//! Every pipeline is a fixed list of blocking invocations. Steps run one at a
//! time; each result is checked against the workspace [`FailurePolicy`].
//!
//! | Pipeline | Steps |
//! |----------|-------|
//! | test     | vet, test |
//! | build    | clean caches, fmt, build (stamped) |
//! | run      | run entry point (stamped) |
//! | generate | purge, recreate, fetch API document, validate, generate, copy models, fmt |
//! | config   | scaffold manifest, scaffold login config |
//! | login    | cf api, cf auth, cf target |
//! | push     | cf push (rolling) |
//! | release  | none |

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, ProcessRunner, ProgressReporter},
        services::{ConfigScaffolder, VersionResolver},
    },
    domain::{
        ConfigArtifact, FailurePolicy, Invocation, ScaffoldResult, VersionStamp, Workspace,
        path_str,
    },
    error::{BrokerctlError, BrokerctlResult},
};

/// Runs the pipeline for each command against one [`Workspace`].
pub struct PipelineRunner {
    runner: Box<dyn ProcessRunner>,
    filesystem: Box<dyn Filesystem>,
    reporter: Box<dyn ProgressReporter>,
    workspace: Workspace,
}

impl PipelineRunner {
    /// Create a pipeline runner with the given adapters.
    pub fn new(
        runner: Box<dyn ProcessRunner>,
        filesystem: Box<dyn Filesystem>,
        reporter: Box<dyn ProgressReporter>,
        workspace: Workspace,
    ) -> Self {
        Self {
            runner,
            filesystem,
            reporter,
            workspace,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    fn scaffolder(&self) -> ConfigScaffolder<'_> {
        ConfigScaffolder::new(self.filesystem.as_ref(), &self.workspace)
    }

    fn resolve_version(&self) -> BrokerctlResult<VersionStamp> {
        VersionResolver::new(
            self.runner.as_ref(),
            &self.workspace.tools.git,
            &self.workspace.version,
        )
        .resolve()
    }

    fn go<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new(&self.workspace.tools.go, args)
    }

    fn cf<I, S>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Invocation::new(&self.workspace.tools.cf, args)
    }

    // -------------------------------------------------------------------------
    // Pipelines
    // -------------------------------------------------------------------------

    /// Vet and test every package.
    #[instrument(skip(self))]
    pub fn test(&self, verbose: bool) -> BrokerctlResult<()> {
        self.reporter.stage("vet & test broker");

        self.step(self.go(["vet", "./..."]))?;

        let mut args = vec!["test", "./..."];
        if verbose {
            args.push("-v");
        }
        self.step(self.go(args))
    }

    /// Clean caches, format, and compile with the version stamp injected.
    #[instrument(skip(self))]
    pub fn build(&self, verbose: bool) -> BrokerctlResult<()> {
        let stamp = self.resolve_version()?;
        info!(%stamp, "Build identity resolved");

        self.reporter.stage("clean broker");
        self.step(self.go(["clean", "-r", "-cache", "-testcache", "-modcache"]))?;

        self.reporter.stage("fmt broker");
        self.step(self.go(["fmt", "./..."]))?;

        self.reporter.stage("build broker");
        let ldflags = stamp.ldflags();
        self.step(self.go(["build", ldflags.as_str(), "-v", "./..."]))?;

        if verbose {
            self.reporter.note(&ldflags);
        }
        Ok(())
    }

    /// Run the broker entry point with the version stamp injected.
    #[instrument(skip(self))]
    pub fn run(&self, _verbose: bool) -> BrokerctlResult<()> {
        let stamp = self.resolve_version()?;
        info!(%stamp, "Build identity resolved");

        self.reporter.stage("run broker");
        self.step(self.go([
            "run".to_owned(),
            stamp.ldflags(),
            self.workspace.entry_point.clone(),
        ]))
    }

    /// Regenerate server scaffolding and models from the OpenAPI document.
    #[instrument(skip(self))]
    pub fn generate(&self, _verbose: bool) -> BrokerctlResult<()> {
        let ws = &self.workspace;
        let tools = &ws.tools;
        let gen_dir = path_str(&ws.gen_dir);
        let models_dir = path_str(&ws.models_dir);
        let api_doc = path_str(&ws.spec_document_path());

        self.reporter.stage("generate broker");

        // purge outputs
        self.step(Invocation::new(
            &tools.rm,
            ["-rf", gen_dir.as_str(), models_dir.as_str()],
        ))?;
        self.step(Invocation::new(
            &tools.mkdir,
            ["-p", gen_dir.as_str(), models_dir.as_str()],
        ))?;

        // fetch + validate
        self.step(Invocation::new(
            &tools.wget,
            [ws.spec_url.as_str(), "-O", api_doc.as_str()],
        ))?;
        self.step(Invocation::new(
            &tools.openapi_generator,
            ["validate", "-i", api_doc.as_str()],
        ))?;

        // generate
        self.step(Invocation::new(
            &tools.openapi_generator,
            [
                "generate",
                "-i",
                api_doc.as_str(),
                "-g",
                ws.generator.as_str(),
                "-o",
                gen_dir.as_str(),
            ],
        ))?;

        // copy models; the glob needs a shell
        let copy = format!(
            "cp {} {}",
            ws.generated_models_glob(),
            shell_words::quote(&models_dir)
        );
        self.step(Invocation::new(&tools.sh, ["-c", copy.as_str()]))?;

        self.step(self.go(["fmt", models_dir.as_str()]))
    }

    /// Create the manifest and login config from their templates.
    #[instrument(skip(self))]
    pub fn config(&self, _verbose: bool) -> BrokerctlResult<Vec<(ConfigArtifact, ScaffoldResult)>> {
        self.reporter.stage("create configuration");

        let scaffolder = self.scaffolder();
        let mut results = Vec::with_capacity(ConfigArtifact::ALL.len());
        for artifact in ConfigArtifact::ALL {
            let result = scaffolder.scaffold(artifact)?;
            self.reporter
                .scaffolded(&scaffolder.path_of(artifact), result);
            results.push((artifact, result));
        }
        Ok(results)
    }

    /// Placeholder: releasing is not implemented, nothing is invoked.
    #[instrument(skip(self))]
    pub fn release(&self, verbose: bool) -> BrokerctlResult<()> {
        self.reporter.stage("release broker");
        self.reporter.note("tbd");
        self.reporter.note(&format!("verbose: {verbose}"));
        Ok(())
    }

    /// Authenticate against Cloud Foundry with the scaffolded login config.
    #[instrument(skip(self))]
    pub fn login(&self, _verbose: bool) -> BrokerctlResult<()> {
        self.reporter.stage("login cloud foundry");

        // Parse fully before the first `cf` call: no partial logins.
        let config = self.scaffolder().load_login_config()?;
        let creds = config.credentials();

        self.step(self.cf(["api", config.api_url()]))?;
        self.step(
            self.cf(["auth", creds.user.as_str(), creds.password.as_str()])
                .sensitive(),
        )?;
        self.step(self.cf([
            "target",
            "-o",
            creds.org.as_str(),
            "-s",
            creds.space.as_str(),
        ]))
    }

    /// Deploy with the scaffolded manifest using a rolling update.
    #[instrument(skip(self))]
    pub fn push(&self, _verbose: bool) -> BrokerctlResult<()> {
        self.reporter.stage("push to cloud foundry");

        let manifest = path_str(&self.scaffolder().require(ConfigArtifact::Manifest)?);
        self.step(self.cf([
            "push",
            "-f",
            manifest.as_str(),
            "--strategy",
            "rolling",
        ]))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Run one step to completion and apply the failure policy.
    fn step(&self, invocation: Invocation) -> BrokerctlResult<()> {
        debug!(command = %invocation, "Running step");

        let failure: BrokerctlError = match self.runner.run(&invocation) {
            Ok(output) if output.is_success() => return Ok(()),
            Ok(output) => ApplicationError::ExternalInvocationFailed {
                command: invocation.to_string(),
                exit_code: output.exit_code,
            }
            .into(),
            Err(e) => e,
        };

        match self.workspace.failure_policy {
            FailurePolicy::Halt => Err(failure),
            FailurePolicy::Continue => {
                warn!(error = %failure, "Step failed, continuing");
                Ok(())
            }
        }
    }
}
