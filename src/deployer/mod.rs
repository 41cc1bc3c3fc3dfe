//! Registration of discovered artifacts with Maven
//!
//! [`ArtifactDispatcher`] handles one artifact at a time: write the temporary
//! POM, run `install-file` / `deploy-file`, remove the POM, and hand back the
//! dependency snippet. The walkers in [`walkers`] feed it the JARs of the
//! bundle folders and the top-level JARs, and [`deploy_plugins`] ties the
//! scan, both walkers and the [`DeploymentReport`] together.
//!
//! # Sequential Processing
//!
//! All artifacts share one temporary POM path, so dispatch takes `&mut self`
//! and every Maven run is awaited before the next artifact starts. The first
//! failing artifact aborts the run; nothing after it is processed.

pub mod report;
pub mod walkers;

pub use report::DeploymentReport;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::constants::{SEPARATOR, TEMP_POM_FILE_NAME};
use crate::core::{ArtifactDescriptor, ArtifactOrigin};
use crate::discovery::scan_plugins_dir;
use crate::maven::{MavenAction, MavenCommand, RepositoryOptions};
use crate::templating::{render_dependency_snippet, write_pom};

/// Settings shared by every artifact of a run.
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// Resolved Maven executable
    pub maven_executable: PathBuf,
    /// Install or deploy
    pub action: MavenAction,
    /// Optional settings/repository flags
    pub repository: RepositoryOptions,
    /// Where the temporary POM is written
    pub pom_path: PathBuf,
    /// Print commands without running Maven
    pub dry_run: bool,
}

impl DeployOptions {
    /// Options with the default temporary POM path and no optional flags.
    pub fn new(maven_executable: impl Into<PathBuf>, action: MavenAction) -> Self {
        Self {
            maven_executable: maven_executable.into(),
            action,
            repository: RepositoryOptions::default(),
            pom_path: Self::default_pom_path(),
            dry_run: false,
        }
    }

    /// `<system temp dir>/pom.xml`
    #[must_use]
    pub fn default_pom_path() -> PathBuf {
        std::env::temp_dir().join(TEMP_POM_FILE_NAME)
    }
}

/// Removes the temporary POM when dropped, on success and error paths alike.
struct TempPom<'a> {
    path: &'a Path,
}

impl<'a> TempPom<'a> {
    fn write(path: &'a Path, descriptor: &ArtifactDescriptor) -> Result<Self> {
        let guard = Self {
            path,
        };
        write_pom(path, &descriptor.coordinates)?;
        Ok(guard)
    }
}

impl Drop for TempPom<'_> {
    fn drop(&mut self) {
        match std::fs::remove_file(self.path) {
            Ok(()) => tracing::debug!("Removed temporary POM {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!("Failed to remove temporary POM {}: {}", self.path.display(), e);
            }
        }
    }
}

/// Registers single artifacts with Maven.
pub struct ArtifactDispatcher {
    options: DeployOptions,
    dispatched: usize,
}

impl ArtifactDispatcher {
    pub const fn new(options: DeployOptions) -> Self {
        Self {
            options,
            dispatched: 0,
        }
    }

    pub const fn options(&self) -> &DeployOptions {
        &self.options
    }

    /// Number of artifacts registered so far.
    pub const fn dispatched(&self) -> usize {
        self.dispatched
    }

    /// Register one artifact and return its dependency snippet.
    ///
    /// # Errors
    ///
    /// Returns the Maven failure (a
    /// [`DeployerError::MavenCommandFailed`](crate::core::DeployerError::MavenCommandFailed))
    /// or an IO/template error. The temporary POM has already been removed
    /// when this returns.
    pub async fn dispatch(&mut self, descriptor: &ArtifactDescriptor) -> Result<String> {
        let coordinates = &descriptor.coordinates;
        println!("{SEPARATOR}");
        println!("path       : {}", descriptor.path.display());
        println!("groupId    : {}", coordinates.group_id);
        println!("artifactId : {}", coordinates.artifact_id);
        println!("version    : {}", coordinates.version);

        {
            let _pom = TempPom::write(&self.options.pom_path, descriptor)?;

            let command = MavenCommand::file_goal(
                &self.options.maven_executable,
                self.options.action,
                descriptor,
                &self.options.pom_path,
                &self.options.repository,
            );

            println!("{SEPARATOR}");
            println!("{}", command.command_line());

            if self.options.dry_run {
                tracing::info!("Dry run, not executing Maven for {}", coordinates);
            } else {
                command.execute().await.with_context(|| {
                    format!("Failed to {} {}", self.options.action, descriptor.path.display())
                })?;
            }
        }

        let snippet = render_dependency_snippet(coordinates)?;
        println!("{SEPARATOR}");
        println!("{snippet}");
        println!("{SEPARATOR}");

        self.dispatched += 1;
        Ok(snippet)
    }
}

/// Scan the plugins directory and register everything in it.
///
/// Bundle folders are processed before top-level JARs. JARs from bundle
/// folders end up in [`DeploymentReport::runtime`], top-level JARs in
/// [`DeploymentReport::compile`].
pub async fn deploy_plugins(
    dispatcher: &mut ArtifactDispatcher,
    plugins_path: &Path,
    version: &str,
) -> Result<DeploymentReport> {
    let listing = scan_plugins_dir(plugins_path)?;

    println!("following polarion bundles detected = {:?}", listing.bundle_folders);
    println!();
    println!("following polarion jars detected = {:?}", listing.top_level_jars);
    println!();

    let mut report = DeploymentReport::default();
    report.extend(
        ArtifactOrigin::Bundle,
        walkers::process_bundle_folders(dispatcher, plugins_path, &listing.bundle_folders, version)
            .await?,
    );
    report.extend(
        ArtifactOrigin::TopLevel,
        walkers::process_top_level_jars(dispatcher, plugins_path, &listing.top_level_jars, version)
            .await?,
    );
    Ok(report)
}
