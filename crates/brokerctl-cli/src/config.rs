//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only ever sees the [`Workspace`]
//! built from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--keep-going`, handled in [`AppConfig::to_workspace`])
//! 2. Environment variables: `BROKERCTL_<SECTION>__<KEY>`, e.g.
//!    `BROKERCTL_PATHS__CONFIG_DIR=deploy`
//! 3. `--config <FILE>` if given, otherwise `./brokerctl.toml` if present
//! 4. The per-user file at [`AppConfig::global_config_path`]
//! 5. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use brokerctl_core::domain::{DEFAULT_VERSION, FailurePolicy, Toolchain, Workspace};

/// Project-local configuration file, picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = "brokerctl.toml";

const ENV_PREFIX: &str = "BROKERCTL";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub build: BuildConfig,
    pub paths: PathsConfig,
    pub codegen: CodegenConfig,
    pub tools: ToolsConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Version stamped into the binary.
    pub version: String,
    pub entry_point: String,
    /// Same as passing `--keep-going` on every invocation.
    pub keep_going: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub gen_dir: PathBuf,
    pub models_dir: PathBuf,
    pub config_dir: PathBuf,
    pub template_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    pub spec_url: String,
    pub generator: String,
}

/// Executable names; override to pin a specific binary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub go: String,
    pub git: String,
    pub cf: String,
    pub wget: String,
    pub openapi_generator: String,
    pub rm: String,
    pub mkdir: String,
    pub sh: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        let ws = Workspace::default();
        Self {
            version: DEFAULT_VERSION.into(),
            entry_point: ws.entry_point,
            keep_going: false,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        let ws = Workspace::default();
        Self {
            gen_dir: ws.gen_dir,
            models_dir: ws.models_dir,
            config_dir: ws.config_dir,
            template_dir: ws.template_dir,
        }
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        let ws = Workspace::default();
        Self {
            spec_url: ws.spec_url,
            generator: ws.generator,
        }
    }
}

impl Default for ToolsConfig {
    fn default() -> Self {
        let Toolchain {
            go,
            git,
            cf,
            wget,
            openapi_generator,
            rm,
            mkdir,
            sh,
        } = Toolchain::default();
        Self {
            go,
            git,
            cf,
            wget,
            openapi_generator,
            rm,
            mkdir,
            sh,
        }
    }
}

impl AppConfig {
    /// Load configuration from every layer.
    ///
    /// `config_file` is the path the user passed via `--config`; it must
    /// exist.  Without it, `./brokerctl.toml` is read when present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(global) = Self::global_config_path() {
            builder = builder.add_source(config::File::from(global).required(false));
        }

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.as_path()).required(true)),
            None => builder.add_source(config::File::from(Path::new(LOCAL_CONFIG_FILE)).required(false)),
        };

        let settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("Failed to read configuration")?;

        settings
            .try_deserialize::<Self>()
            .context("Invalid configuration")
    }

    /// Per-user configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness;
    /// `None` when no home directory can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "sklevenz", "brokerctl")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Build the core's view of the checkout.
    ///
    /// `keep_going` comes from the command line and can only loosen the
    /// configured policy.
    pub fn to_workspace(&self, keep_going: bool) -> Workspace {
        let failure_policy = if keep_going || self.build.keep_going {
            FailurePolicy::Continue
        } else {
            FailurePolicy::Halt
        };

        let tools = &self.tools;
        Workspace {
            gen_dir: self.paths.gen_dir.clone(),
            models_dir: self.paths.models_dir.clone(),
            config_dir: self.paths.config_dir.clone(),
            template_dir: self.paths.template_dir.clone(),
            entry_point: self.build.entry_point.clone(),
            spec_url: self.codegen.spec_url.clone(),
            generator: self.codegen.generator.clone(),
            version: self.build.version.clone(),
            tools: Toolchain {
                go: tools.go.clone(),
                git: tools.git.clone(),
                cf: tools.cf.clone(),
                wget: tools.wget.clone(),
                openapi_generator: tools.openapi_generator.clone(),
                rm: tools.rm.clone(),
                mkdir: tools.mkdir.clone(),
                sh: tools.sh.clone(),
            },
            failure_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn defaults_match_the_core_workspace() {
        assert_eq!(AppConfig::default().to_workspace(false), Workspace::default());
    }

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn keep_going_flag_switches_policy() {
        let ws = AppConfig::default().to_workspace(true);
        assert_eq!(ws.failure_policy, FailurePolicy::Continue);
    }

    #[test]
    fn keep_going_setting_switches_policy() {
        let mut cfg = AppConfig::default();
        cfg.build.keep_going = true;
        assert_eq!(cfg.to_workspace(false).failure_policy, FailurePolicy::Continue);
    }

    #[test]
    fn explicit_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[build]\nversion = \"2.3.4\"\n\n[paths]\nconfig_dir = \"deploy\"\n\n[tools]\ncf = \"cf8\"\n",
        )
        .unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();

        assert_eq!(cfg.build.version, "2.3.4");
        assert_eq!(cfg.paths.config_dir, PathBuf::from("deploy"));
        assert_eq!(cfg.tools.cf, "cf8");
        // untouched keys keep their defaults
        assert_eq!(cfg.tools.go, "go");
        assert_eq!(cfg.paths.gen_dir, PathBuf::from("./gen"));
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[build\nversion = ").unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }

    #[test]
    fn global_config_path_is_named_config_toml() {
        if let Some(path) = AppConfig::global_config_path() {
            assert!(path.ends_with("config.toml"));
        }
    }
}
