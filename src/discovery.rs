//! Discovery of artifacts in a Polarion installation.
//!
//! A Polarion installation keeps its plugins in `<home>/polarion/plugins`.
//! Two kinds of entries there matter:
//!
//! - **bundle folders**: directories such as `com.polarion.alm.tracker_3.23.10`
//!   whose JARs are registered under the group taken from the folder name
//!   (everything before the first `_`)
//! - **top-level JARs**: `.jar` files lying directly in the plugins directory,
//!   all registered under [`THIRDPARTY_GROUP_ID`]
//!
//! Every listing here is shallow (depth 1). Entries are returned sorted by
//! file name so a run processes artifacts in a reproducible order.
//!
//! [`THIRDPARTY_GROUP_ID`]: crate::constants::THIRDPARTY_GROUP_ID

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

use crate::constants::{BUNDLE_GROUP_SEPARATOR, JAR_EXTENSION, PLUGINS_SUBPATH};
use crate::core::DeployerError;

/// Result of the shallow scan of the plugins directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluginsListing {
    /// Names of the directories directly under the plugins directory
    pub bundle_folders: Vec<String>,
    /// Names of the `.jar` files directly under the plugins directory
    pub top_level_jars: Vec<String>,
}

/// `<home>/polarion/plugins`
#[must_use]
pub fn plugins_dir(polarion_home: &Path) -> PathBuf {
    PLUGINS_SUBPATH.iter().fold(polarion_home.to_path_buf(), |path, segment| path.join(segment))
}

/// Group id of a bundle folder: its name up to the first `_`.
///
/// A name without `_` is used whole.
#[must_use]
pub fn group_id_from_bundle(folder_name: &str) -> &str {
    folder_name.split(BUNDLE_GROUP_SEPARATOR).next().unwrap_or(folder_name)
}

/// Artifact id of a JAR: its file name without the trailing `.jar`.
#[must_use]
pub fn artifact_id_from_jar(jar_name: &str) -> &str {
    jar_name.strip_suffix(JAR_EXTENSION).unwrap_or(jar_name)
}

fn is_jar(name: &str) -> bool {
    name.ends_with(JAR_EXTENSION)
}

/// Kind of a directory entry after resolving symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

/// Entries directly inside `dir` with their resolved kind. Symlinks count as
/// what they point to; links whose target cannot be resolved are skipped.
fn shallow_entries(dir: &Path) -> Result<Vec<(String, EntryKind)>> {
    let mut entries = Vec::new();
    let walker = WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name();
    for entry in walker {
        let entry =
            entry.with_context(|| format!("Failed to read directory entry in {}", dir.display()))?;
        let path = entry.path();
        let kind = if path.is_dir() {
            EntryKind::Dir
        } else if path.is_file() {
            EntryKind::File
        } else {
            if entry.path_is_symlink() {
                warn!("Skipping {}: symlink target cannot be resolved", path.display());
            }
            continue;
        };
        trace!("Found entry: {} ({:?})", path.display(), kind);
        entries.push((entry.file_name().to_string_lossy().into_owned(), kind));
    }
    Ok(entries)
}

/// Scan the plugins directory once, splitting its entries into bundle
/// folders and top-level JARs. Other files are ignored.
///
/// # Errors
///
/// Returns [`DeployerError::PluginsDirNotFound`] if `plugins_path` is not a
/// directory, or an IO error if it cannot be listed.
pub fn scan_plugins_dir(plugins_path: &Path) -> Result<PluginsListing> {
    if !plugins_path.is_dir() {
        return Err(DeployerError::PluginsDirNotFound {
            path: plugins_path.display().to_string(),
        }
        .into());
    }

    let mut listing = PluginsListing::default();
    for (name, kind) in shallow_entries(plugins_path)? {
        match kind {
            EntryKind::Dir => listing.bundle_folders.push(name),
            EntryKind::File if is_jar(&name) => listing.top_level_jars.push(name),
            EntryKind::File => {}
        }
    }

    debug!(
        "Scanned {}: {} bundle folders, {} top-level jars",
        plugins_path.display(),
        listing.bundle_folders.len(),
        listing.top_level_jars.len()
    );
    Ok(listing)
}

/// Names of the `.jar` files directly inside `dir`.
///
/// # Errors
///
/// Returns an error if `dir` cannot be listed.
pub fn list_jars(dir: &Path) -> Result<Vec<String>> {
    let jars: Vec<String> = shallow_entries(dir)?
        .into_iter()
        .filter(|(name, kind)| *kind == EntryKind::File && is_jar(name))
        .map(|(name, _)| name)
        .collect();
    debug!("Found {} jars in {}", jars.len(), dir.display());
    Ok(jars)
}
