//! Type-safe Maven command builder
//!
//! This module provides a fluent API for building and executing Maven
//! commands, so the `install-file` / `deploy-file` invocation is composed in
//! one place and failures are reported consistently.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

use super::MavenAction;
use crate::constants::PACKAGING;
use crate::core::{ArtifactDescriptor, DeployerError};

/// Optional flags that point Maven at a settings file and a target repository.
///
/// Each flag is appended only when its value is present. `repository_id` and
/// `repository_url` are only meaningful for `deploy`, but are passed through
/// for `install` as well if given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryOptions {
    /// Passed as `--settings <path>`
    pub settings_path: Option<PathBuf>,
    /// Passed as `-DrepositoryId=<id>`
    pub repository_id: Option<String>,
    /// Passed as `-Durl=<url>`
    pub repository_url: Option<String>,
}

/// Builder for constructing and executing Maven commands.
///
/// # Examples
///
/// ```rust,no_run
/// use polarion_artifacts_deployer::maven::MavenCommand;
///
/// # async fn example() -> anyhow::Result<()> {
/// MavenCommand::new("mvn")
///     .arg("help:effective-settings")
///     .property("output", "/tmp/settings.xml")
///     .execute()
///     .await?;
/// # Ok(())
/// # }
/// ```
///
/// # Default Configuration
///
/// - **Output**: inherited, so Maven's progress streams to the console
/// - **Timeout**: none; the call returns when Maven exits
/// - **Environment**: inherited from the parent process
pub struct MavenCommand {
    /// Executable to run (e.g. `mvn` or an absolute path)
    program: PathBuf,

    /// Arguments in the order they are passed to Maven
    args: Vec<String>,

    /// Optional context string for log messages (typically the artifact)
    context: Option<String>,
}

impl MavenCommand {
    /// Creates a builder for `program` with no arguments.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            context: None,
        }
    }

    /// Adds a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Adds multiple arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Adds a `-D<key>=<value>` system property.
    pub fn property(self, key: &str, value: impl AsRef<str>) -> Self {
        let arg = format!("-D{key}={}", value.as_ref());
        self.arg(arg)
    }

    /// Set a context for logging (e.g., the artifact being registered)
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// The full command as a single display string, e.g.
    /// `mvn install:install-file -Dfile=... -DpomFile=...`.
    #[must_use]
    pub fn command_line(&self) -> String {
        let mut line = self.program.display().to_string();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    /// Execute the command, waiting for Maven to exit. Maven's output goes
    /// straight to the console.
    ///
    /// # Errors
    ///
    /// Returns [`DeployerError::MavenCommandFailed`] on a non-zero exit
    /// status, or an IO error if the process could not be started.
    pub async fn execute(self) -> Result<()> {
        let start = std::time::Instant::now();
        let goal = self.args.first().cloned().unwrap_or_else(|| "unknown".to_string());

        match self.context {
            Some(ref ctx) => {
                tracing::debug!(target: "maven", "({}) Executing command: {}", ctx, self.command_line());
            }
            None => tracing::debug!(target: "maven", "Executing command: {}", self.command_line()),
        }

        let status = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .with_context(|| format!("Failed to execute {}", self.command_line()))?;

        if !status.success() {
            tracing::debug!(target: "maven", "Command failed with exit code: {:?}", status.code());
            return Err(DeployerError::MavenCommandFailed {
                goal,
                exit_code: status.code(),
            }
            .into());
        }

        let elapsed = start.elapsed();
        match self.context {
            Some(ref ctx) => tracing::debug!(
                target: "maven::perf",
                "({}) Maven {} took {:.2}s",
                ctx,
                goal,
                elapsed.as_secs_f64()
            ),
            None => tracing::debug!(
                target: "maven::perf",
                "Maven {} took {:.2}s",
                goal,
                elapsed.as_secs_f64()
            ),
        }
        Ok(())
    }
}

// Convenience builders for the artifact goals

impl MavenCommand {
    /// Create an `install-file` / `deploy-file` command for one artifact.
    ///
    /// Arguments, in order: goal, `-Dfile`, `-DgroupId`, `-DartifactId`,
    /// `-Dversion`, `-Dpackaging=jar`, `-DgeneratePom=false`, `-DpomFile`,
    /// then the optional settings and repository flags.
    pub fn file_goal(
        program: impl AsRef<Path>,
        action: MavenAction,
        artifact: &ArtifactDescriptor,
        pom_file: &Path,
        repository: &RepositoryOptions,
    ) -> Self {
        let coordinates = &artifact.coordinates;
        let mut cmd = Self::new(program)
            .arg(action.goal())
            .property("file", artifact.path.display().to_string())
            .property("groupId", &coordinates.group_id)
            .property("artifactId", &coordinates.artifact_id)
            .property("version", &coordinates.version)
            .property("packaging", PACKAGING)
            .property("generatePom", "false")
            .property("pomFile", pom_file.display().to_string())
            .with_context(coordinates.to_string());

        if let Some(ref settings) = repository.settings_path {
            cmd = cmd.args(["--settings".to_string(), settings.display().to_string()]);
        }
        if let Some(ref id) = repository.repository_id {
            cmd = cmd.property("repositoryId", id);
        }
        if let Some(ref url) = repository.repository_url {
            cmd = cmd.property("url", url);
        }
        cmd
    }
}
