//! Platform-specific helpers
//!
//! Locating the Maven executable differs between Windows (`mvn.cmd`) and
//! Unix-like systems (`mvn`), and operator-supplied paths may contain `~/`
//! or environment variables that need expanding before use.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::core::DeployerError;

/// Returns true when running on Windows.
#[must_use]
pub const fn is_windows() -> bool {
    cfg!(windows)
}

/// Name of the Maven launcher on this platform.
///
/// Maven ships a `mvn.cmd` batch launcher on Windows; elsewhere it is a
/// plain `mvn` shell script.
#[must_use]
pub const fn get_maven_command() -> &'static str {
    if is_windows() {
        "mvn.cmd"
    } else {
        "mvn"
    }
}

/// Returns the home directory of the current user.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine home directory.\n\n\
            Set the HOME environment variable (or USERPROFILE on Windows)"
        )
    })
}

/// Expands a leading `~/` to the current user's home directory.
///
/// Everything else, `$` included, is kept exactly as given.
///
/// # Errors
///
/// Returns an error when `~` is used in any form other than `~/`, or when
/// the home directory is unknown.
pub fn expand_home(path: &str) -> Result<PathBuf> {
    if let Some(stripped) = path.strip_prefix("~/") {
        Ok(get_home_dir()?.join(stripped))
    } else if path == "~" {
        get_home_dir()
    } else if path.starts_with('~') {
        Err(anyhow::anyhow!(
            "Invalid path: {path}\n\n\
            Tilde expansion only supports '~/' for home directory.\n\
            Use '~/' followed by a relative path, like '~/polarion'"
        ))
    } else {
        Ok(PathBuf::from(path))
    }
}

/// Resolves a path with tilde expansion and environment variable substitution.
///
/// Supports `~/...` for the current user's home and `$VAR` / `${VAR}`
/// references. Paths without either are returned unchanged.
///
/// # Errors
///
/// Returns an error when [`expand_home`] fails or when a referenced variable
/// is undefined.
///
/// # Examples
///
/// ```rust,no_run
/// use polarion_artifacts_deployer::utils::platform::resolve_path;
///
/// # fn example() -> anyhow::Result<()> {
/// let settings = resolve_path("$HOME/.m2/settings.xml")?;
/// # Ok(())
/// # }
/// ```
pub fn resolve_path(path: &str) -> Result<PathBuf> {
    let expanded = expand_home(path)?;
    let path_str = expanded.to_string_lossy();
    let expanded_str = shellexpand::env(&path_str)
        .with_context(|| {
            format!(
                "Failed to expand environment variables in path: {path_str}\n\n\
                Common issues:\n\
                - Undefined environment variable (e.g., $UNDEFINED_VAR)\n\
                - Invalid variable syntax (use $VAR or ${{VAR}})"
            )
        })?
        .into_owned();

    Ok(PathBuf::from(expanded_str))
}

/// Locates the Maven executable to invoke.
///
/// Anything containing a path separator is taken as a path and must exist.
/// Bare names are looked up on `PATH`.
///
/// # Errors
///
/// Returns [`DeployerError::MavenNotFound`] when the executable cannot be
/// found.
pub fn find_maven(executable: &str) -> Result<PathBuf> {
    let candidate = Path::new(executable);
    if candidate.components().count() > 1 {
        return if candidate.is_file() {
            Ok(candidate.to_path_buf())
        } else {
            Err(DeployerError::MavenNotFound {
                executable: executable.to_string(),
            }
            .into())
        };
    }

    which::which(executable).map_err(|e| {
        tracing::debug!("which({}) failed: {}", executable, e);
        DeployerError::MavenNotFound {
            executable: executable.to_string(),
        }
        .into()
    })
}
