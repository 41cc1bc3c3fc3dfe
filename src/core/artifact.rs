//! Artifact coordinates and descriptors.

use std::fmt;
use std::path::{Path, PathBuf};

/// Maven coordinates of one artifact.
///
/// Values are used verbatim in the generated POM, the Maven command line and
/// the dependency snippet; nothing checks them for characters Maven or XML
/// would reject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCoordinates {
    /// Maven `groupId`
    pub group_id: String,
    /// Maven `artifactId`
    pub artifact_id: String,
    /// Maven `version`
    pub version: String,
}

impl ArtifactCoordinates {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for ArtifactCoordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// Everything needed to register one JAR: its location and its coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    /// Path to the JAR file
    pub path: PathBuf,
    /// Coordinates the JAR is registered under
    pub coordinates: ArtifactCoordinates,
}

impl ArtifactDescriptor {
    pub fn new(path: impl AsRef<Path>, coordinates: ArtifactCoordinates) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            coordinates,
        }
    }
}

/// Where in the plugins directory an artifact was found.
///
/// Decides which of the two final reports its snippet belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactOrigin {
    /// A JAR inside a bundle folder; reported as a runtime platform dependency.
    Bundle,
    /// A JAR directly under the plugins directory; reported as a compile
    /// platform dependency.
    TopLevel,
}
