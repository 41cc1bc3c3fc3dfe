//! Walkers turning discovered names into artifact descriptors.

use anyhow::Result;
use std::path::Path;

use super::ArtifactDispatcher;
use crate::constants::THIRDPARTY_GROUP_ID;
use crate::core::{ArtifactCoordinates, ArtifactDescriptor};
use crate::discovery::{artifact_id_from_jar, group_id_from_bundle, list_jars};

/// Register the JARs inside each bundle folder.
///
/// Folders are visited in the given order and JARs inside a folder in listing
/// order. Each JAR's group id comes from its folder name (see
/// [`group_id_from_bundle`]). Returns the snippets in dispatch order and
/// stops at the first failure.
pub async fn process_bundle_folders(
    dispatcher: &mut ArtifactDispatcher,
    plugins_path: &Path,
    folder_names: &[String],
    version: &str,
) -> Result<Vec<String>> {
    let mut snippets = Vec::new();
    for folder_name in folder_names {
        println!("handling {folder_name} ...");
        let group_id = group_id_from_bundle(folder_name);
        let folder_path = plugins_path.join(folder_name);

        for jar_name in list_jars(&folder_path)? {
            let descriptor = ArtifactDescriptor::new(
                folder_path.join(&jar_name),
                ArtifactCoordinates::new(group_id, artifact_id_from_jar(&jar_name), version),
            );
            snippets.push(dispatcher.dispatch(&descriptor).await?);
        }
    }
    Ok(snippets)
}

/// Register the JARs lying directly in the plugins directory under
/// [`THIRDPARTY_GROUP_ID`].
pub async fn process_top_level_jars(
    dispatcher: &mut ArtifactDispatcher,
    plugins_path: &Path,
    jar_names: &[String],
    version: &str,
) -> Result<Vec<String>> {
    let mut snippets = Vec::with_capacity(jar_names.len());
    for jar_name in jar_names {
        let descriptor = ArtifactDescriptor::new(
            plugins_path.join(jar_name),
            ArtifactCoordinates::new(THIRDPARTY_GROUP_ID, artifact_id_from_jar(jar_name), version),
        );
        snippets.push(dispatcher.dispatch(&descriptor).await?);
    }
    Ok(snippets)
}
