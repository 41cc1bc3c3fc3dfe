//! polarion-artifacts-deployer
//!
//! Registers the JARs of a local Polarion installation as Maven artifacts so
//! that Polarion extensions can be built against them with ordinary Maven
//! dependencies.
//!
//! # How It Works
//!
//! 1. One shallow scan of `<polarion-home>/polarion/plugins` separates bundle
//!    folders from JARs lying directly in the directory ([`discovery`]).
//! 2. Every JAR inside a bundle folder is registered under the group named by
//!    the folder prefix (`com.polarion.alm.tracker_3.23.10` becomes
//!    `com.polarion.alm.tracker`); top-level JARs go to
//!    `com.polarion.thirdparty` ([`deployer::walkers`]).
//! 3. For each JAR a minimal POM is written to the temp directory
//!    ([`templating`]) and `mvn install:install-file` or
//!    `mvn deploy:deploy-file` is run ([`maven`]).
//! 4. The `<dependency>` declarations of all registered artifacts are printed
//!    as two reports ([`deployer::DeploymentReport`]).
//!
//! Artifacts are processed strictly one after another. The first failing
//! Maven invocation ends the run.
//!
//! # Modules
//!
//! - [`cli`] - argument parsing, settings resolution and the run driver
//! - [`config`] - optional TOML configuration file
//! - [`core`] - artifact types and error handling
//! - [`deployer`] - per-artifact dispatch, walkers and reports
//! - [`discovery`] - plugins directory scan and naming rules
//! - [`maven`] - Maven actions and command builder
//! - [`templating`] - POM and dependency snippet templates
//! - [`utils`] - platform helpers

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod deployer;
pub mod discovery;
pub mod maven;
pub mod templating;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
