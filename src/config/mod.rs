//! Optional TOML configuration file
//!
//! Settings that rarely change between runs (Maven executable, settings.xml,
//! target repository) can be kept in a file passed with `--config`:
//!
//! ```toml
//! maven_executable = "/opt/maven/bin/mvn"
//! settings_path = "~/.m2/settings-polarion.xml"
//! action = "deploy"
//! repository_id = "nexus"
//! repository_url = "https://nexus.example.com/repository/polarion"
//! ```
//!
//! Values given on the command line always win over the file.

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use crate::core::DeployerError;
use crate::maven::MavenAction;

/// Contents of the configuration file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeployerConfig {
    /// Maven executable name or path
    pub maven_executable: Option<String>,
    /// Maven action to use when `--action` is not given
    pub action: Option<MavenAction>,
    /// Path to Maven's settings.xml; `~/` and `$VAR` are expanded
    pub settings_path: Option<String>,
    /// Repository id from settings.xml (deploy)
    pub repository_id: Option<String>,
    /// Repository URL to deploy to (deploy)
    pub repository_url: Option<String>,
}

impl DeployerConfig {
    /// Load configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns [`DeployerError::ConfigError`] if the file cannot be read or
    /// is not valid TOML for this structure.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            DeployerError::ConfigError {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| DeployerError::ConfigError {
            message: format!("Failed to parse {}: {e}", path.display()),
        })?;
        tracing::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` when given, otherwise return the empty configuration.
    pub async fn load_with_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path).await,
            None => Ok(Self::default()),
        }
    }
}
