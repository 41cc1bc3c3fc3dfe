//! POM and dependency snippet rendering
//!
//! Both documents are small Tera templates filled from an
//! [`ArtifactCoordinates`]. Autoescaping is off: coordinates are written
//! verbatim, so an identifier containing XML special characters produces a
//! document Maven will reject. No validation happens here.
//!
//! # Example
//!
//! ```rust,no_run
//! use polarion_artifacts_deployer::core::ArtifactCoordinates;
//! use polarion_artifacts_deployer::templating::{render_dependency_snippet, write_pom};
//!
//! # fn example() -> anyhow::Result<()> {
//! let coordinates = ArtifactCoordinates::new("com.polarion.thirdparty", "lucene-core", "2310");
//! write_pom(std::path::Path::new("/tmp/pom.xml"), &coordinates)?;
//! println!("{}", render_dependency_snippet(&coordinates)?);
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use std::path::Path;
use tera::{Context as TeraContext, Tera};

use crate::constants::{DEPENDENCY_SCOPE, PACKAGING};
use crate::core::{ArtifactCoordinates, DeployerError};

const POM_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<project xsi:schemaLocation="http://maven.apache.org/POM/4.0.0 https://maven.apache.org/xsd/maven-4.0.0.xsd" xmlns="http://maven.apache.org/POM/4.0.0"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
    <modelVersion>4.0.0</modelVersion>
    <groupId>{{ group_id }}</groupId>
    <artifactId>{{ artifact_id }}</artifactId>
    <version>{{ version }}</version>
    <description>POM was automatically created by polarion-artifact-deployer utility</description>
</project>"#;

const DEPENDENCY_TEMPLATE: &str = r"<dependency>
    <groupId>{{ group_id }}</groupId>
    <artifactId>{{ artifact_id }}</artifactId>
    <version>{{ version }}</version>
    <scope>{{ scope }}</scope>
    <type>{{ packaging }}</type>
</dependency>";

fn build_context(coordinates: &ArtifactCoordinates) -> TeraContext {
    let mut context = TeraContext::new();
    context.insert("group_id", &coordinates.group_id);
    context.insert("artifact_id", &coordinates.artifact_id);
    context.insert("version", &coordinates.version);
    context.insert("scope", DEPENDENCY_SCOPE);
    context.insert("packaging", PACKAGING);
    context
}

fn render(name: &str, template: &str, coordinates: &ArtifactCoordinates) -> Result<String> {
    tracing::trace!("Rendering {} template for {}", name, coordinates);
    Tera::one_off(template, &build_context(coordinates), false).map_err(|e| {
        DeployerError::TemplateError {
            template: name.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Render the minimal POM for an artifact.
pub fn render_pom(coordinates: &ArtifactCoordinates) -> Result<String> {
    render("pom", POM_TEMPLATE, coordinates)
}

/// Render the POM and write it to `path`, replacing any existing file.
pub fn write_pom(path: &Path, coordinates: &ArtifactCoordinates) -> Result<()> {
    let content = render_pom(coordinates)?;
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write POM to {}", path.display()))?;
    tracing::debug!("Wrote POM for {} to {}", coordinates, path.display());
    Ok(())
}

/// Render the `<dependency>` snippet reported for a registered artifact.
pub fn render_dependency_snippet(coordinates: &ArtifactCoordinates) -> Result<String> {
    render("dependency", DEPENDENCY_TEMPLATE, coordinates)
}
