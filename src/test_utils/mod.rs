//! Test utilities
//!
//! Helpers shared by unit and integration tests: one-time logging setup, a
//! builder for fake Polarion installations and a fake `mvn` that records its
//! arguments instead of talking to a repository.
//!
//! # Example
//!
//! ```rust,no_run
//! use polarion_artifacts_deployer::test_utils::{FakeMaven, PolarionFixture};
//!
//! let polarion = PolarionFixture::new()
//!     .bundle("com.polarion.alm.tracker_3.23.10", &["tracker.jar"])
//!     .top_level_jar("lucene-core-9.0.jar")
//!     .build()
//!     .unwrap();
//! let mvn = FakeMaven::succeeding().unwrap();
//! ```

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Uses `level` when given, otherwise `RUST_LOG`; does nothing when neither
/// is set.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer() // Important: uses test-compatible writer
            .with_target(true) // Show module targets like "maven"
            .with_thread_ids(false)
            .try_init();
    });
}

/// Builder for a throwaway Polarion installation.
#[derive(Debug, Default)]
pub struct PolarionFixture {
    bundles: Vec<(String, Vec<String>)>,
    top_level_jars: Vec<String>,
    other_files: Vec<String>,
}

impl PolarionFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a bundle folder containing the given files.
    pub fn bundle(mut self, name: &str, files: &[&str]) -> Self {
        self.bundles.push((name.to_string(), files.iter().map(ToString::to_string).collect()));
        self
    }

    /// Add a JAR directly in the plugins directory.
    pub fn top_level_jar(mut self, name: &str) -> Self {
        self.top_level_jars.push(name.to_string());
        self
    }

    /// Add a non-JAR file directly in the plugins directory.
    pub fn other_file(mut self, name: &str) -> Self {
        self.other_files.push(name.to_string());
        self
    }

    /// Create the installation in a new temporary directory.
    pub fn build(self) -> Result<PolarionInstallation> {
        let temp_dir = TempDir::new()?;
        let plugins = temp_dir.path().join("polarion").join("plugins");
        std::fs::create_dir_all(&plugins)?;

        for (bundle, files) in &self.bundles {
            let dir = plugins.join(bundle);
            std::fs::create_dir_all(&dir)?;
            for file in files {
                std::fs::write(dir.join(file), b"PK")?;
            }
        }
        for name in self.top_level_jars.iter().chain(&self.other_files) {
            std::fs::write(plugins.join(name), b"PK")?;
        }

        Ok(PolarionInstallation {
            temp_dir,
        })
    }
}

/// A Polarion installation on disk, removed when dropped.
pub struct PolarionInstallation {
    temp_dir: TempDir,
}

impl PolarionInstallation {
    /// Value for `--polarion-home`.
    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    /// `<home>/polarion/plugins`
    pub fn plugins_path(&self) -> PathBuf {
        self.home().join("polarion").join("plugins")
    }
}

/// A shell script standing in for `mvn`.
///
/// Every invocation appends one line with its arguments to a log file and
/// copies the POM it was given next to it (`pom-<n>.xml`). The script exits
/// with `exit_code` once `fail_on_call` invocations have been made, and with
/// 0 before that.
#[cfg(unix)]
pub struct FakeMaven {
    temp_dir: TempDir,
}

#[cfg(unix)]
impl FakeMaven {
    /// A Maven that always succeeds.
    pub fn succeeding() -> Result<Self> {
        Self::create(None)
    }

    /// A Maven whose `call`-th invocation (1-based) exits with `exit_code`.
    pub fn failing_on(call: usize, exit_code: i32) -> Result<Self> {
        Self::create(Some((call, exit_code)))
    }

    fn create(failure: Option<(usize, i32)>) -> Result<Self> {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new()?;
        let dir = temp_dir.path();
        let (fail_on, exit_code) = failure.unwrap_or((0, 0));
        let script = format!(
            r#"#!/bin/sh
dir="{dir}"
n=$(( $(cat "$dir/calls.log" 2>/dev/null | wc -l) + 1 ))
echo "$*" >> "$dir/calls.log"
for arg in "$@"; do
  case "$arg" in
    -DpomFile=*) cp "${{arg#-DpomFile=}}" "$dir/pom-$n.xml" ;;
  esac
done
if [ "$n" -eq {fail_on} ]; then
  exit {exit_code}
fi
exit 0
"#,
            dir = dir.display(),
        );
        let path = dir.join("mvn");
        std::fs::write(&path, script)?;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
        Ok(Self {
            temp_dir,
        })
    }

    /// Path of the script, for `--mvn`.
    pub fn path(&self) -> PathBuf {
        self.temp_dir.path().join("mvn")
    }

    /// Arguments of each invocation, in order.
    pub fn calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.temp_dir.path().join("calls.log"))
            .map(|log| log.lines().map(ToString::to_string).collect())
            .unwrap_or_default()
    }

    /// Contents of the POM seen by the `call`-th invocation (1-based).
    pub fn pom(&self, call: usize) -> Option<String> {
        std::fs::read_to_string(self.temp_dir.path().join(format!("pom-{call}.xml"))).ok()
    }
}
