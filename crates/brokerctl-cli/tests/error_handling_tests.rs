//! Argument errors and the help surface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn quiet_and_verbose_conflict() {
    let mut cmd = Command::cargo_bin("brokerctl").unwrap();
    cmd.args(["--quiet", "--verbose", "release"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unknown_flag_is_an_argument_error() {
    let mut cmd = Command::cargo_bin("brokerctl").unwrap();
    cmd.args(["--frobnicate", "release"]);

    cmd.assert().failure().code(2);
}

#[test]
fn help_succeeds_and_lists_options() {
    let mut cmd = Command::cargo_bin("brokerctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--keep-going"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("login"));
}

#[test]
fn version_succeeds() {
    let mut cmd = Command::cargo_bin("brokerctl").unwrap();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
