//! Paths, URLs, and tool names the pipelines operate on.
//!
//! Built by the CLI from its configuration; the core never reads config
//! files itself.

use std::path::{Component, Path, PathBuf};

use crate::domain::{DEFAULT_VERSION, DomainError};

/// Open Service Broker API description the `generate` pipeline fetches.
pub const DEFAULT_SPEC_URL: &str =
    "https://raw.githubusercontent.com/openservicebrokerapi/servicebroker/master/swagger.yaml";

/// What a pipeline does when an external step exits non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the pipeline and report the failing step.
    #[default]
    Halt,
    /// Log a warning and carry on with the next step.
    Continue,
}

/// Executable names for every external collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    pub go: String,
    pub git: String,
    pub cf: String,
    pub wget: String,
    pub openapi_generator: String,
    pub rm: String,
    pub mkdir: String,
    pub sh: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            go: "go".into(),
            git: "git".into(),
            cf: "cf".into(),
            wget: "wget".into(),
            openapi_generator: "openapi-generator".into(),
            rm: "rm".into(),
            mkdir: "mkdir".into(),
            sh: "sh".into(),
        }
    }
}

/// Everything a pipeline needs to know about the checkout it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Generated-output directory (fetched API document, generator output).
    pub gen_dir: PathBuf,
    /// Stable location the generated model files are copied to.
    pub models_dir: PathBuf,
    /// Generated-config directory holding the manifest and login config.
    pub config_dir: PathBuf,
    /// Shipped templates for the generated config.
    pub template_dir: PathBuf,
    /// Main entry point passed to `go run`.
    pub entry_point: String,
    pub spec_url: String,
    /// `openapi-generator` generator name.
    pub generator: String,
    pub version: String,
    pub tools: Toolchain,
    pub failure_policy: FailurePolicy,
}

impl Default for Workspace {
    fn default() -> Self {
        Self {
            gen_dir: PathBuf::from("./gen"),
            models_dir: PathBuf::from("./openapi"),
            config_dir: PathBuf::from("./config"),
            template_dir: PathBuf::from("./template"),
            entry_point: "brokerApp.go".into(),
            spec_url: DEFAULT_SPEC_URL.into(),
            generator: "go-server".into(),
            version: DEFAULT_VERSION.into(),
            tools: Toolchain::default(),
            failure_policy: FailurePolicy::Halt,
        }
    }
}

impl Workspace {
    pub fn manifest_path(&self) -> PathBuf {
        self.config_dir.join("manifest.yml")
    }

    pub fn login_config_path(&self) -> PathBuf {
        self.config_dir.join("config.yml")
    }

    pub fn manifest_template_path(&self) -> PathBuf {
        self.template_dir.join("manifest-template.yml")
    }

    pub fn login_config_template_path(&self) -> PathBuf {
        self.template_dir.join("config-template.yml")
    }

    /// Where the fetched OpenAPI document is stored.
    pub fn spec_document_path(&self) -> PathBuf {
        self.gen_dir.join("swagger.yaml")
    }

    /// Shell glob matching the model files the generator writes.
    pub fn generated_models_glob(&self) -> String {
        format!(
            "{}/model_*",
            shell_words::quote(&path_str(&self.gen_dir.join("go")))
        )
    }

    /// Reject settings that would turn into broken invocations.
    pub fn validate(&self) -> Result<(), DomainError> {
        let tools = [
            ("tools.go", &self.tools.go),
            ("tools.git", &self.tools.git),
            ("tools.cf", &self.tools.cf),
            ("tools.wget", &self.tools.wget),
            ("tools.openapi_generator", &self.tools.openapi_generator),
            ("tools.rm", &self.tools.rm),
            ("tools.mkdir", &self.tools.mkdir),
            ("tools.sh", &self.tools.sh),
            ("build.entry_point", &self.entry_point),
            ("build.version", &self.version),
            ("codegen.spec_url", &self.spec_url),
            ("codegen.generator", &self.generator),
        ];
        for (name, value) in tools {
            if value.trim().is_empty() {
                return Err(DomainError::InvalidSetting {
                    name,
                    reason: "must not be empty".into(),
                });
            }
        }

        let dirs = [
            ("paths.gen_dir", &self.gen_dir),
            ("paths.models_dir", &self.models_dir),
            ("paths.config_dir", &self.config_dir),
            ("paths.template_dir", &self.template_dir),
        ];
        for (name, dir) in dirs {
            if dir.as_os_str().is_empty() {
                return Err(DomainError::InvalidSetting {
                    name,
                    reason: "must not be empty".into(),
                });
            }
        }

        // `generate` runs `rm -rf` on these; the scaffolded config must survive that.
        let config_dir = lexical(&self.config_dir);
        for (name, purged) in [
            ("paths.gen_dir", &self.gen_dir),
            ("paths.models_dir", &self.models_dir),
        ] {
            if config_dir.starts_with(lexical(purged)) {
                return Err(DomainError::InvalidSetting {
                    name: "paths.config_dir",
                    reason: format!(
                        "{} lies inside {name} ({}), which `generate` deletes",
                        self.config_dir.display(),
                        purged.display()
                    ),
                });
            }
        }

        Ok(())
    }
}

/// `path` without `.` components, so `./gen`, `gen` and `gen/.` compare equal.
///
/// Purely lexical: `..` and symlinks are left as they are.
fn lexical(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Lossy string form of a path, for building tool arguments.
pub fn path_str(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
