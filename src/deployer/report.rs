//! The two dependency reports printed at the end of a run.

use std::fmt;

use crate::core::ArtifactOrigin;

const RUNTIME_RULE: &str = "####################################";
const COMPILE_RULE: &str = "************************************";

/// Dependency snippets collected during a run, split by origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentReport {
    /// Snippets of JARs found inside bundle folders
    pub runtime: Vec<String>,
    /// Snippets of JARs found directly in the plugins directory
    pub compile: Vec<String>,
}

impl DeploymentReport {
    /// Append snippets to the report matching their origin.
    pub fn extend(&mut self, origin: ArtifactOrigin, snippets: impl IntoIterator<Item = String>) {
        match origin {
            ArtifactOrigin::Bundle => self.runtime.extend(snippets),
            ArtifactOrigin::TopLevel => self.compile.extend(snippets),
        }
    }

    /// Total number of registered artifacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.runtime.len() + self.compile.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn write_section(
    f: &mut fmt::Formatter<'_>,
    rule: &str,
    title: &str,
    snippets: &[String],
) -> fmt::Result {
    writeln!(f, "{rule}")?;
    writeln!(f, "{title}")?;
    writeln!(f, "{rule}")?;
    writeln!(f, "{}", snippets.join("\n"))?;
    writeln!(f, "{rule}")
}

impl fmt::Display for DeploymentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, RUNTIME_RULE, "Runtime platform maven dependencies:", &self.runtime)?;
        write_section(f, COMPILE_RULE, "Compile platform maven dependencies:", &self.compile)
    }
}
