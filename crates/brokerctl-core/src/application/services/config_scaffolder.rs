//! Config Scaffolder - creates the deployment config once, then reads it.
//!
//! The manifest and login config are copied from shipped templates on the
//! first `config` run. Existing files are never overwritten.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{ConfigArtifact, LoginConfig, ScaffoldResult, Workspace},
    error::BrokerctlResult,
};

/// Materializes and loads the generated config files of a [`Workspace`].
pub struct ConfigScaffolder<'a> {
    filesystem: &'a dyn Filesystem,
    workspace: &'a Workspace,
}

impl<'a> ConfigScaffolder<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, workspace: &'a Workspace) -> Self {
        Self {
            filesystem,
            workspace,
        }
    }

    /// Where `artifact` lives once scaffolded.
    pub fn path_of(&self, artifact: ConfigArtifact) -> PathBuf {
        match artifact {
            ConfigArtifact::Manifest => self.workspace.manifest_path(),
            ConfigArtifact::LoginConfig => self.workspace.login_config_path(),
        }
    }

    fn template_of(&self, artifact: ConfigArtifact) -> PathBuf {
        match artifact {
            ConfigArtifact::Manifest => self.workspace.manifest_template_path(),
            ConfigArtifact::LoginConfig => self.workspace.login_config_template_path(),
        }
    }

    /// Copy the template for `artifact` unless the file already exists.
    #[instrument(skip(self))]
    pub fn scaffold(&self, artifact: ConfigArtifact) -> BrokerctlResult<ScaffoldResult> {
        self.filesystem.create_dir_all(&self.workspace.config_dir)?;

        let target = self.path_of(artifact);
        if self.filesystem.exists(&target) {
            debug!(path = %target.display(), "Config file exists, leaving it untouched");
            return Ok(ScaffoldResult::AlreadyExists);
        }

        let template = self.template_of(artifact);
        if !self.filesystem.exists(&template) {
            return Err(ApplicationError::TemplateMissing {
                artifact,
                path: template,
            }
            .into());
        }

        self.filesystem.copy_file(&template, &target)?;
        info!(path = %target.display(), "Config file created");
        Ok(ScaffoldResult::Created)
    }

    /// Scaffold every artifact in [`ConfigArtifact::ALL`] order.
    pub fn scaffold_all(&self) -> BrokerctlResult<Vec<(ConfigArtifact, ScaffoldResult)>> {
        ConfigArtifact::ALL
            .into_iter()
            .map(|artifact| Ok((artifact, self.scaffold(artifact)?)))
            .collect()
    }

    /// Path of `artifact`, or `PreconditionMissing` if it was never scaffolded.
    pub fn require(&self, artifact: ConfigArtifact) -> BrokerctlResult<PathBuf> {
        let path = self.path_of(artifact);
        if self.filesystem.exists(&path) {
            Ok(path)
        } else {
            Err(ApplicationError::PreconditionMissing { artifact, path }.into())
        }
    }

    /// Load the scaffolded login config.
    pub fn load_login_config(&self) -> BrokerctlResult<LoginConfig> {
        let path = self.require(ConfigArtifact::LoginConfig)?;
        self.load(&path)
    }

    /// Parse a login config file. Only well-formedness is checked.
    #[instrument(skip(self))]
    pub fn load(&self, path: &std::path::Path) -> BrokerctlResult<LoginConfig> {
        let content = self.filesystem.read_to_string(path)?;
        LoginConfig::from_yaml(&content).map_err(|e| {
            ApplicationError::ConfigParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into()
        })
    }
}
