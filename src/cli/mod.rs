//! Command-line interface
//!
//! The tool has a single command: scan a Polarion installation and register
//! each JAR with Maven. [`Cli`] holds the parsed flags. [`Cli::resolve`]
//! merges them with the optional configuration file into [`RunSettings`],
//! and [`Cli::execute`] runs the whole pass and prints the two dependency
//! reports.
//!
//! # Examples
//!
//! ```bash
//! # install everything into ~/.m2
//! polarion-artifacts-deployer --polarion-home /opt/polarion --polarion-version 2310
//!
//! # deploy to a company repository
//! polarion-artifacts-deployer --polarion-home /opt/polarion --polarion-version 2310 \
//!     --action deploy --settings-path ~/.m2/settings.xml \
//!     --repository-id nexus --repository-url https://nexus.example.com/repository/polarion
//! ```


use anyhow::Result;
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::DeployerConfig;
use crate::deployer::{ArtifactDispatcher, DeployOptions, DeploymentReport, deploy_plugins};
use crate::discovery::plugins_dir;
use crate::maven::{MavenAction, RepositoryOptions};
use crate::utils::platform::{expand_home, find_maven, get_maven_command, resolve_path};

/// Install or deploy Polarion artifacts to a Maven repository.
#[derive(Parser, Debug)]
#[command(
    name = "polarion-artifacts-deployer",
    about = "install or deploy Polarion artifacts to maven repository",
    version,
    long_about = "Scans <polarion-home>/polarion/plugins and registers every JAR found there \
                  (directly or inside a bundle folder) with Maven, then prints the matching \
                  <dependency> declarations."
)]
pub struct Cli {
    /// Polarion installation folder (`~/` is expanded, nothing else)
    #[arg(long, value_name = "path", env = "POLARION_HOME")]
    pub(crate) polarion_home: String,

    /// Polarion version, used as the version of every artifact
    #[arg(long, value_name = "version", env = "POLARION_VERSION")]
    pub(crate) polarion_version: String,

    /// Maven action [default: install]
    #[arg(long, value_enum)]
    pub(crate) action: Option<MavenAction>,

    /// Path to settings.xml
    #[arg(long, value_name = "path")]
    pub(crate) settings_path: Option<String>,

    /// Repository id from maven settings.xml
    #[arg(long, value_name = "repo")]
    pub(crate) repository_id: Option<String>,

    /// Repository URL to deploy the artifacts
    #[arg(long, value_name = "url")]
    pub(crate) repository_url: Option<String>,

    /// Maven executable to run instead of `mvn` from PATH
    #[arg(long, value_name = "path", env = "POLARION_DEPLOYER_MVN")]
    pub(crate) mvn: Option<String>,

    /// TOML file with defaults for the Maven options
    #[arg(short, long, value_name = "path", env = "POLARION_DEPLOYER_CONFIG")]
    pub(crate) config: Option<PathBuf>,

    /// Print what would be done without running Maven
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub(crate) verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    /// Polarion installation root
    pub polarion_home: PathBuf,
    /// Version applied to every artifact
    pub version: String,
    /// Install or deploy
    pub action: MavenAction,
    /// Maven executable name or path, before lookup
    pub maven_executable: String,
    /// Optional settings/repository flags
    pub repository: RepositoryOptions,
    /// Do not run Maven
    pub dry_run: bool,
}

impl RunSettings {
    /// `<polarion_home>/polarion/plugins`
    #[must_use]
    pub fn plugins_path(&self) -> PathBuf {
        plugins_dir(&self.polarion_home)
    }
}

impl Cli {
    /// Log filter: `RUST_LOG` when set, otherwise derived from the flags.
    #[must_use]
    pub fn log_filter(&self) -> EnvFilter {
        if std::env::var("RUST_LOG").is_ok() {
            return EnvFilter::from_default_env();
        }
        let level = if self.verbose {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "warn"
        };
        EnvFilter::new(level)
    }

    /// Install the global tracing subscriber, writing to stderr.
    pub fn init_logging(&self) {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(self.log_filter())
            .with_writer(std::io::stderr)
            .with_target(self.verbose)
            .try_init();
    }

    /// Merge the flags with `config`. Flags win; unset values fall back to
    /// the file, then to the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a path cannot be expanded.
    pub fn resolve(&self, config: &DeployerConfig) -> Result<RunSettings> {
        let settings_path = self
            .settings_path
            .as_deref()
            .or(config.settings_path.as_deref())
            .map(resolve_path)
            .transpose()?;

        Ok(RunSettings {
            polarion_home: expand_home(&self.polarion_home)?,
            version: self.polarion_version.clone(),
            action: self.action.or(config.action).unwrap_or_default(),
            maven_executable: self
                .mvn
                .clone()
                .or_else(|| config.maven_executable.clone())
                .unwrap_or_else(|| get_maven_command().to_string()),
            repository: RepositoryOptions {
                settings_path,
                repository_id: self.repository_id.clone().or_else(|| config.repository_id.clone()),
                repository_url: self
                    .repository_url
                    .clone()
                    .or_else(|| config.repository_url.clone()),
            },
            dry_run: self.dry_run,
        })
    }

    /// Run the scan and registration, printing progress and the reports to
    /// stdout.
    ///
    /// # Errors
    ///
    /// Returns the first failure; a Maven failure carries the exit status
    /// `main` terminates with.
    pub async fn execute(self) -> Result<DeploymentReport> {
        let config = DeployerConfig::load_with_optional(self.config.as_deref()).await?;
        let settings = self.resolve(&config)?;
        tracing::debug!("Resolved settings: {:?}", settings);
        run(&settings).await
    }
}

fn locate_maven(settings: &RunSettings) -> Result<PathBuf> {
    match find_maven(&settings.maven_executable) {
        Ok(path) => Ok(path),
        Err(_) if settings.dry_run => Ok(PathBuf::from(&settings.maven_executable)),
        Err(e) => Err(e),
    }
}

fn print_header(settings: &RunSettings, plugins_path: &Path) {
    println!("polarion home = {}", settings.polarion_home.display());
    println!("polarion version = {}", settings.version);
    println!("polarion plugins path = {}", plugins_path.display());
    println!("mvn action = {}", settings.action);
}

/// Execute one run with already resolved settings.
///
/// # Errors
///
/// Returns [`DeployerError::MavenNotFound`] when Maven cannot be located
/// outside a dry run, [`DeployerError::PluginsDirNotFound`] when the plugins
/// directory is missing, and the first failed Maven invocation otherwise.
///
/// [`DeployerError::MavenNotFound`]: crate::core::DeployerError::MavenNotFound
/// [`DeployerError::PluginsDirNotFound`]: crate::core::DeployerError::PluginsDirNotFound
pub async fn run(settings: &RunSettings) -> Result<DeploymentReport> {
    let plugins_path = settings.plugins_path();
    print_header(settings, &plugins_path);

    let mut options = DeployOptions::new(locate_maven(settings)?, settings.action);
    options.repository = settings.repository.clone();
    options.dry_run = settings.dry_run;

    let mut dispatcher = ArtifactDispatcher::new(options);
    tracing::debug!("Using Maven at {}", dispatcher.options().maven_executable.display());
    let report = deploy_plugins(&mut dispatcher, &plugins_path, &settings.version).await?;

    print!("{report}");
    if report.is_empty() {
        tracing::warn!("No artifacts found in {}", plugins_path.display());
    }
    tracing::info!(
        "Registered {} artifacts ({} runtime, {} compile)",
        dispatcher.dispatched(),
        report.runtime.len(),
        report.compile.len()
    );
    Ok(report)
}
