//! Version Resolver - derives the build identity from git state.

use tracing::{debug, instrument};

use crate::{
    application::{ApplicationError, ports::ProcessRunner},
    domain::{Invocation, VersionStamp},
    error::{BrokerctlError, BrokerctlResult},
};

/// Queries source control for the commit to stamp into a build.
///
/// A clean tree records `git rev-parse HEAD`; a tree with uncommitted
/// changes records `dirty` and no hash at all.
pub struct VersionResolver<'a> {
    runner: &'a dyn ProcessRunner,
    git: &'a str,
    version: &'a str,
}

impl<'a> VersionResolver<'a> {
    pub fn new(runner: &'a dyn ProcessRunner, git: &'a str, version: &'a str) -> Self {
        Self {
            runner,
            git,
            version,
        }
    }

    #[instrument(skip_all, fields(version = %self.version))]
    pub fn resolve(&self) -> BrokerctlResult<VersionStamp> {
        if !self.tree_is_clean()? {
            debug!("Working tree has uncommitted changes");
            return Ok(VersionStamp::dirty(self.version));
        }

        let head = self.query(Invocation::new(self.git, ["rev-parse", "HEAD"]).captured())?;
        if !head.is_success() {
            return Err(resolution_error(format!(
                "`git rev-parse HEAD` failed: {}",
                head.stderr.trim()
            )));
        }

        let commit = head.stdout.trim();
        if commit.is_empty() {
            return Err(resolution_error("`git rev-parse HEAD` printed no commit"));
        }

        debug!(commit, "Resolved commit");
        Ok(VersionStamp::new(self.version, commit))
    }

    /// `git diff --quiet` exits 0 for a clean tree and 1 for a dirty one.
    fn tree_is_clean(&self) -> BrokerctlResult<bool> {
        let diff = self.query(Invocation::new(self.git, ["diff", "--quiet"]).captured())?;
        match diff.exit_code {
            Some(0) => Ok(true),
            Some(1) => Ok(false),
            Some(code) => Err(resolution_error(format!(
                "`git diff --quiet` exited with status {code}: {}",
                diff.stderr.trim()
            ))),
            None => Err(resolution_error("`git diff --quiet` was terminated by a signal")),
        }
    }

    fn query(&self, invocation: Invocation) -> BrokerctlResult<crate::domain::ProcessOutput> {
        debug!(command = %invocation, "Querying source control");
        self.runner
            .run(&invocation)
            .map_err(|e| resolution_error(e.to_string()))
    }
}

fn resolution_error(reason: impl Into<String>) -> BrokerctlError {
    ApplicationError::VersionResolution {
        reason: reason.into(),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use mockall::{Sequence, predicate::function};

    use super::*;
    use crate::application::ports::MockProcessRunner;
    use crate::domain::{DEFAULT_VERSION, ProcessOutput};

    fn is(argv: &'static [&'static str]) -> impl Fn(&Invocation) -> bool {
        move |inv: &Invocation| inv.argv() == argv
    }

    #[test]
    fn clean_tree_records_head() {
        let mut runner = MockProcessRunner::new();
        let mut seq = Sequence::new();
        runner
            .expect_run()
            .with(function(is(&["git", "diff", "--quiet"])))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(ProcessOutput::success()));
        runner
            .expect_run()
            .with(function(is(&["git", "rev-parse", "HEAD"])))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(ProcessOutput::success().with_stdout("0a1b2c3d\n")));

        let stamp = VersionResolver::new(&runner, "git", DEFAULT_VERSION)
            .resolve()
            .unwrap();
        assert_eq!(stamp, VersionStamp::new("0.0.0-snapshot", "0a1b2c3d"));
    }

    #[test]
    fn dirty_tree_records_marker_without_hash_lookup() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .with(function(is(&["git", "diff", "--quiet"])))
            .times(1)
            .returning(|_| Ok(ProcessOutput::with_code(1)));

        let stamp = VersionResolver::new(&runner, "git", "1.0.0")
            .resolve()
            .unwrap();
        assert_eq!(stamp.commit, "dirty");
        assert_eq!(stamp.version, "1.0.0");
    }

    #[test]
    fn queries_are_captured() {
        let mut runner = MockProcessRunner::new();
        runner
            .expect_run()
            .withf(|inv| inv.output == crate::domain::OutputMode::Capture)
            .times(1)
            .returning(|_| Ok(ProcessOutput::with_code(1)));

        VersionResolver::new(&runner, "git", DEFAULT_VERSION)
            .resolve()
            .unwrap();
    }

    #[test]
    fn outside_a_repository_is_an_error() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().times(1).returning(|_| {
            Ok(ProcessOutput {
                exit_code: Some(129),
                stderr: "fatal: not a git repository".into(),
                ..ProcessOutput::default()
            })
        });

        let err = VersionResolver::new(&runner, "git", DEFAULT_VERSION)
            .resolve()
            .unwrap_err();
        assert!(matches!(
            err,
            BrokerctlError::Application(ApplicationError::VersionResolution { .. })
        ));
        assert!(err.to_string().contains("not a git repository"));
    }

    #[test]
    fn missing_git_is_an_error() {
        let mut runner = MockProcessRunner::new();
        runner.expect_run().times(1).returning(|inv| {
            Err(ApplicationError::SpawnFailed {
                command: inv.to_string(),
                reason: "No such file or directory".into(),
            }
            .into())
        });

        let err = VersionResolver::new(&runner, "git", DEFAULT_VERSION)
            .resolve()
            .unwrap_err();
        assert!(matches!(
            err,
            BrokerctlError::Application(ApplicationError::VersionResolution { .. })
        ));
    }

    #[test]
    fn empty_head_is_an_error() {
        let mut runner = MockProcessRunner::new();
        let mut seq = Sequence::new();
        runner
            .expect_run()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(ProcessOutput::success()));
        runner
            .expect_run()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(ProcessOutput::success().with_stdout("  \n")));

        assert!(
            VersionResolver::new(&runner, "git", DEFAULT_VERSION)
                .resolve()
                .is_err()
        );
    }
}
