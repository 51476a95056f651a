//! End-to-end tests for commands that need no external tools.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// `brokerctl` running in `dir`, isolated from the caller's environment.
fn brokerctl(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("brokerctl").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("RUST_LOG");
    cmd
}

fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../template")
}

/// A checkout with the shipped templates in `./template`.
fn checkout_with_templates() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let template_dir = dir.path().join("template");
    fs::create_dir(&template_dir).unwrap();
    for name in ["manifest-template.yml", "config-template.yml"] {
        fs::copy(shipped_templates().join(name), template_dir.join(name)).unwrap();
    }
    dir
}

#[test]
fn no_command_prints_usage() {
    let dir = tempfile::tempdir().unwrap();

    brokerctl(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("push"));
}

#[test]
fn unknown_command_prints_usage_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();

    brokerctl(dir.path())
        .arg("deploy")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command 'deploy'"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn command_names_are_case_sensitive() {
    let dir = tempfile::tempdir().unwrap();

    brokerctl(dir.path())
        .arg("Build")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command 'Build'"));
}

#[test]
fn release_is_a_placeholder() {
    let dir = tempfile::tempdir().unwrap();

    brokerctl(dir.path())
        .arg("release")
        .assert()
        .success()
        .stdout(predicate::str::contains("-- release broker"))
        .stdout(predicate::str::contains("tbd"))
        .stdout(predicate::str::contains("verbose: false"));
}

#[test]
fn verbose_flag_reaches_the_pipeline() {
    let dir = tempfile::tempdir().unwrap();

    brokerctl(dir.path())
        .args(["-v", "release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("verbose: true"));
}

#[test]
fn quiet_hides_progress() {
    let dir = tempfile::tempdir().unwrap();

    brokerctl(dir.path())
        .args(["--quiet", "release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tbd").not());
}

#[test]
fn config_scaffolds_once_and_then_preserves_edits() {
    let dir = checkout_with_templates();
    let manifest = dir.path().join("config/manifest.yml");
    let login = dir.path().join("config/config.yml");

    brokerctl(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("file created:").count(2));

    assert_eq!(
        fs::read_to_string(&manifest).unwrap(),
        fs::read_to_string(shipped_templates().join("manifest-template.yml")).unwrap()
    );
    assert!(login.exists());

    fs::write(&login, "edited by hand\n").unwrap();

    brokerctl(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("file exists already").count(2));

    assert_eq!(fs::read_to_string(&login).unwrap(), "edited by hand\n");
}

#[test]
fn config_without_templates_fails() {
    let dir = tempfile::tempdir().unwrap();

    brokerctl(dir.path())
        .arg("config")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("template not found"));
}

#[test]
fn login_without_config_points_at_config_command() {
    let dir = tempfile::tempdir().unwrap();

    brokerctl(dir.path())
        .arg("login")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("config/config.yml"))
        .stderr(predicate::str::contains("brokerctl config"));
}

#[test]
fn push_without_manifest_points_at_config_command() {
    let dir = tempfile::tempdir().unwrap();

    brokerctl(dir.path())
        .arg("push")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("manifest not found"));
}

#[test]
fn malformed_login_config_is_a_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("config")).unwrap();
    fs::write(dir.path().join("config/config.yml"), "cloud-foundry: [\n").unwrap();

    brokerctl(dir.path())
        .arg("login")
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Failed to parse"));
}

#[test]
fn no_color_environment_value_is_accepted() {
    let dir = tempfile::tempdir().unwrap();

    for value in ["1", "true", "yes"] {
        brokerctl(dir.path())
            .env("NO_COLOR", value)
            .arg("release")
            .assert()
            .success()
            .stdout(predicate::str::contains("-- release broker"))
            .stdout(predicate::str::contains("\u{1b}[").not());
    }
}

#[test]
fn no_color_flag_is_accepted() {
    let dir = tempfile::tempdir().unwrap();

    brokerctl(dir.path())
        .env_remove("NO_COLOR")
        .args(["--no-color", "release"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tbd"));
}

#[test]
fn usage_ignores_broken_project_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("brokerctl.toml"), "[paths\nconfig_dir = ").unwrap();

    brokerctl(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));

    brokerctl(dir.path())
        .arg("deploy")
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown command 'deploy'"));
}

#[test]
fn usage_ignores_invalid_settings() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("brokerctl.toml"),
        "[paths]\nconfig_dir = \"./gen\"\n",
    )
    .unwrap();

    brokerctl(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"));
}
