//! Maven integration
//!
//! Artifacts are registered by running the system `mvn` binary (like the
//! Polarion SDK documentation suggests doing by hand) rather than talking to
//! a repository directly. This module holds the supported actions and the
//! [`command_builder::MavenCommand`] used to run them.

pub mod command_builder;

pub use command_builder::{MavenCommand, RepositoryOptions};

use clap::ValueEnum;
use serde::Deserialize;
use std::fmt;

/// What to do with each discovered artifact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MavenAction {
    /// Install into the local repository (`install:install-file`)
    #[default]
    Install,
    /// Deploy to a remote repository (`deploy:deploy-file`)
    Deploy,
}

impl MavenAction {
    /// Lowercase action name, also the Maven plugin prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Deploy => "deploy",
        }
    }

    /// Fully qualified goal: `<action>:<action>-file`.
    #[must_use]
    pub fn goal(self) -> String {
        format!("{0}:{0}-file", self.as_str())
    }
}

impl fmt::Display for MavenAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
