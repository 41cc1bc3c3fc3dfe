use assert_cmd::Command;
use std::path::Path;

/// The deployer binary with a private temp directory and a clean environment.
///
/// `TMPDIR` points at `tmp`, so the temporary POM of each run lands in a
/// directory owned by the test.
pub fn deployer(tmp: &Path) -> Command {
    polarion_artifacts_deployer::test_utils::init_test_logging(None);
    let mut cmd = Command::cargo_bin("polarion-artifacts-deployer").unwrap();
    cmd.env("TMPDIR", tmp)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("POLARION_HOME")
        .env_remove("POLARION_VERSION")
        .env_remove("POLARION_DEPLOYER_MVN")
        .env_remove("POLARION_DEPLOYER_CONFIG");
    cmd
}

/// Text between a report title and the next report title (or the end).
pub fn report_section<'a>(stdout: &'a str, title: &str) -> &'a str {
    let start = stdout.rfind(title).map_or(stdout.len(), |i| i + title.len());
    let rest = &stdout[start..];
    let end = rest.find("platform maven dependencies:").unwrap_or(rest.len());
    &rest[..end]
}

pub const RUNTIME_TITLE: &str = "Runtime platform maven dependencies:";
pub const COMPILE_TITLE: &str = "Compile platform maven dependencies:";
