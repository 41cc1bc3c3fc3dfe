//! Global constants used throughout the deployer.
//!
//! Naming conventions of a Polarion installation and the fixed values that
//! end up in every generated POM and Maven invocation live here so they are
//! discoverable in one place.

/// Path segments leading from the Polarion home to the plugins directory.
pub const PLUGINS_SUBPATH: [&str; 2] = ["polarion", "plugins"];

/// Group id assigned to every JAR found directly under the plugins directory.
pub const THIRDPARTY_GROUP_ID: &str = "com.polarion.thirdparty";

/// File extension (including the dot) of artifacts picked up by the scan.
pub const JAR_EXTENSION: &str = ".jar";

/// Separator between the group prefix and the rest of a bundle folder name.
pub const BUNDLE_GROUP_SEPARATOR: char = '_';

/// File name of the temporary POM written into the system temp directory.
///
/// A single path is shared by every artifact of a run, so artifacts must be
/// dispatched one at a time.
pub const TEMP_POM_FILE_NAME: &str = "pom.xml";

/// Packaging passed to `install-file` / `deploy-file`.
pub const PACKAGING: &str = "jar";

/// Scope used in the generated dependency snippets.
pub const DEPENDENCY_SCOPE: &str = "provided";

/// Line printed before and after each Maven invocation.
pub const SEPARATOR: &str = "--------------------";

/// Exit status modulus applied to a failed Maven invocation.
pub const EXIT_CODE_MODULUS: i32 = 255;
