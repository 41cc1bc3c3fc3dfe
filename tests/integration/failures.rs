use polarion_artifacts_deployer::test_utils::{FakeMaven, PolarionFixture};
use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::{RUNTIME_TITLE, deployer};

fn three_artifact_installation() -> polarion_artifacts_deployer::test_utils::PolarionInstallation {
    PolarionFixture::new()
        .bundle("GroupA_1", &["a.jar"])
        .bundle("GroupB_1", &["b.jar"])
        .top_level_jar("c.jar")
        .build()
        .unwrap()
}

#[test]
fn test_failure_stops_run_with_exit_status_modulo_255() {
    let polarion = three_artifact_installation();
    let mvn = FakeMaven::failing_on(2, 44).unwrap();
    let tmp = TempDir::new().unwrap();

    deployer(tmp.path())
        .arg("--polarion-home")
        .arg(polarion.home())
        .args(["--polarion-version", "2310"])
        .arg("--mvn")
        .arg(mvn.path())
        .assert()
        .code(44)
        .stdout(predicate::str::contains(RUNTIME_TITLE).not())
        .stderr(predicate::str::contains("install:install-file"));

    assert_eq!(mvn.calls().len(), 2, "no artifact after the failing one may be processed");
    assert!(!tmp.path().join("pom.xml").exists());
}

#[test]
fn test_exit_status_below_255_is_kept() {
    let polarion = three_artifact_installation();
    // A POSIX shell truncates exit statuses to 8 bits, so 254 is the
    // largest value the fake can report unchanged.
    let mvn = FakeMaven::failing_on(1, 254).unwrap();
    let tmp = TempDir::new().unwrap();

    deployer(tmp.path())
        .arg("--polarion-home")
        .arg(polarion.home())
        .args(["--polarion-version", "2310"])
        .arg("--mvn")
        .arg(mvn.path())
        .assert()
        .code(254);

    assert_eq!(mvn.calls().len(), 1);
}

#[test]
fn test_exit_status_255_does_not_report_success() {
    let polarion = three_artifact_installation();
    let mvn = FakeMaven::failing_on(3, 255).unwrap();
    let tmp = TempDir::new().unwrap();

    deployer(tmp.path())
        .arg("--polarion-home")
        .arg(polarion.home())
        .args(["--polarion-version", "2310"])
        .arg("--mvn")
        .arg(mvn.path())
        .assert()
        .code(1);

    assert_eq!(mvn.calls().len(), 3);
    assert!(!tmp.path().join("pom.xml").exists());
}

#[test]
fn test_missing_plugins_directory() {
    let tmp = TempDir::new().unwrap();
    let mvn = FakeMaven::succeeding().unwrap();

    deployer(tmp.path())
        .arg("--polarion-home")
        .arg(tmp.path().join("not-polarion"))
        .args(["--polarion-version", "2310"])
        .arg("--mvn")
        .arg(mvn.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Polarion plugins directory not found"));
}

#[test]
fn test_missing_maven_executable() {
    let polarion = three_artifact_installation();
    let tmp = TempDir::new().unwrap();

    deployer(tmp.path())
        .arg("--polarion-home")
        .arg(polarion.home())
        .args(["--polarion-version", "2310"])
        .arg("--mvn")
        .arg(tmp.path().join("bin").join("mvn"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("was not found"));
}

#[test]
fn test_required_arguments_are_enforced() {
    let tmp = TempDir::new().unwrap();

    deployer(tmp.path())
        .args(["--polarion-version", "2310"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--polarion-home"));

    deployer(tmp.path())
        .args(["--polarion-home", "/opt/polarion"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--polarion-version"));
}

#[test]
fn test_invalid_action_is_rejected() {
    let tmp = TempDir::new().unwrap();

    deployer(tmp.path())
        .args(["--polarion-home", "/opt/polarion", "--polarion-version", "2310"])
        .args(["--action", "package"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("install").and(predicate::str::contains("deploy")));
}
