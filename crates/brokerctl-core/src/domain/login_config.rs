//! Scaffolded deployment configuration.

use std::fmt;

use serde::Deserialize;

/// The two files the `config` command creates from templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigArtifact {
    /// Deployment topology consumed by `cf push`.
    Manifest,
    /// Platform endpoint and credentials consumed by `login`.
    LoginConfig,
}

impl ConfigArtifact {
    /// Scaffolding order used by the `config` command.
    pub const ALL: [ConfigArtifact; 2] = [ConfigArtifact::Manifest, ConfigArtifact::LoginConfig];
}

impl fmt::Display for ConfigArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manifest => f.write_str("manifest"),
            Self::LoginConfig => f.write_str("login config"),
        }
    }
}

/// Outcome of scaffolding one artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldResult {
    Created,
    AlreadyExists,
}

/// Parsed login config file.
///
/// ```yaml
/// cloud-foundry:
///   api-url: https://api.cf.example.com
///   login:
///     user: admin
///     password: secret
///     org: my-org
///     space: dev
/// ```
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct LoginConfig {
    #[serde(rename = "cloud-foundry")]
    pub cloud_foundry: CloudFoundry,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CloudFoundry {
    pub api_url: String,
    pub login: Credentials,
}

#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    pub user: String,
    pub password: String,
    pub org: String,
    pub space: String,
}

impl LoginConfig {
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn api_url(&self) -> &str {
        &self.cloud_foundry.api_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.cloud_foundry.login
    }
}

impl fmt::Debug for LoginConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginConfig")
            .field("cloud_foundry", &self.cloud_foundry)
            .finish()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("org", &self.org)
            .field("space", &self.space)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
cloud-foundry:
  api-url: https://api.cf.example.com
  login:
    user: admin
    password: s3cret
    org: my-org
    space: dev
";

    #[test]
    fn parses_well_formed_document() {
        let cfg = LoginConfig::from_yaml(SAMPLE).unwrap();
        assert_eq!(cfg.api_url(), "https://api.cf.example.com");
        assert_eq!(cfg.credentials().user, "admin");
        assert_eq!(cfg.credentials().password, "s3cret");
        assert_eq!(cfg.credentials().org, "my-org");
        assert_eq!(cfg.credentials().space, "dev");
    }

    #[test]
    fn missing_key_is_parse_error() {
        let broken = SAMPLE.replace("    space: dev\n", "");
        let err = LoginConfig::from_yaml(&broken).unwrap_err();
        assert!(err.to_string().contains("space"));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        assert!(LoginConfig::from_yaml("cloud-foundry: [unclosed").is_err());
    }

    #[test]
    fn debug_hides_password() {
        let cfg = LoginConfig::from_yaml(SAMPLE).unwrap();
        let dbg = format!("{cfg:?}");
        assert!(dbg.contains("admin"));
        assert!(!dbg.contains("s3cret"));
    }

    #[test]
    fn shipped_template_parses() {
        let template = include_str!("../../../../template/config-template.yml");
        let cfg = LoginConfig::from_yaml(template).unwrap();
        assert!(cfg.api_url().starts_with("https://"));
    }

    #[test]
    fn artifacts_scaffold_manifest_first() {
        assert_eq!(
            ConfigArtifact::ALL,
            [ConfigArtifact::Manifest, ConfigArtifact::LoginConfig]
        );
    }
}
