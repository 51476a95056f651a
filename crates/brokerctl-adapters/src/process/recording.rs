//! Recording process runner for testing.

use std::sync::{Arc, Mutex, PoisonError};

use brokerctl_core::{
    application::{ApplicationError, ports::ProcessRunner},
    domain::{Invocation, ProcessOutput},
    error::BrokerctlResult,
};

/// Test double that records every invocation instead of spawning it.
///
/// Answers are scripted by argv prefix; the first matching rule wins and
/// anything unmatched exits 0 with empty output. Clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingRunner {
    inner: Arc<Mutex<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    log: Vec<Invocation>,
    rules: Vec<Rule>,
}

#[derive(Debug)]
struct Rule {
    prefix: Vec<String>,
    answer: Answer,
}

#[derive(Debug, Clone)]
enum Answer {
    Output(ProcessOutput),
    SpawnFailure,
}

impl Rule {
    fn matches(&self, invocation: &Invocation) -> bool {
        let argv = invocation.argv();
        argv.len() >= self.prefix.len() && self.prefix.iter().zip(&argv).all(|(p, a)| p == a)
    }
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer invocations starting with `prefix` with `output`.
    pub fn respond(self, prefix: &[&str], output: ProcessOutput) -> Self {
        self.push_rule(prefix, Answer::Output(output));
        self
    }

    /// Pretend tools starting with `prefix` cannot be started.
    pub fn fail_to_spawn(self, prefix: &[&str]) -> Self {
        self.push_rule(prefix, Answer::SpawnFailure);
        self
    }

    /// Answer `git diff --quiet` / `git rev-parse HEAD` for a clean tree.
    pub fn clean_tree(self, commit: &str) -> Self {
        self.respond(&["git", "diff", "--quiet"], ProcessOutput::success())
            .respond(
                &["git", "rev-parse", "HEAD"],
                ProcessOutput::success().with_stdout(format!("{commit}\n")),
            )
    }

    /// Answer `git diff --quiet` for a tree with uncommitted changes.
    pub fn dirty_tree(self) -> Self {
        self.respond(&["git", "diff", "--quiet"], ProcessOutput::with_code(1))
    }

    fn push_rule(&self, prefix: &[&str], answer: Answer) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.rules.push(Rule {
            prefix: prefix.iter().map(|s| s.to_string()).collect(),
            answer,
        });
    }

    /// Every invocation so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).log.clone()
    }

    /// Every invocation so far as argv vectors.
    pub fn argv_log(&self) -> Vec<Vec<String>> {
        self.invocations()
            .iter()
            .map(|inv| inv.argv().into_iter().map(str::to_owned).collect())
            .collect()
    }

    /// Tool names invoked so far, in order.
    pub fn tools(&self) -> Vec<String> {
        self.invocations().into_iter().map(|inv| inv.tool).collect()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> BrokerctlResult<ProcessOutput> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.log.push(invocation.clone());

        let answer = inner
            .rules
            .iter()
            .find(|rule| rule.matches(invocation))
            .map(|rule| rule.answer.clone());

        match answer {
            Some(Answer::Output(output)) => Ok(output),
            Some(Answer::SpawnFailure) => Err(ApplicationError::SpawnFailed {
                command: invocation.to_string(),
                reason: "No such file or directory (os error 2)".into(),
            }
            .into()),
            None => Ok(ProcessOutput::success()),
        }
    }
}
