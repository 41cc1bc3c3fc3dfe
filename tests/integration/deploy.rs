use polarion_artifacts_deployer::test_utils::{FakeMaven, PolarionFixture};
use predicates::prelude::*;
use tempfile::TempDir;

use crate::common::{COMPILE_TITLE, RUNTIME_TITLE, deployer, report_section};

#[test]
fn test_install_registers_bundle_and_top_level_jars() {
    let polarion = PolarionFixture::new()
        .bundle("GroupA_1.0.0", &["a.jar", "plugin.xml"])
        .bundle("GroupB_2.0.0", &["b.jar"])
        .top_level_jar("foo-1.0.jar")
        .other_file("readme.txt")
        .build()
        .unwrap();
    let mvn = FakeMaven::succeeding().unwrap();
    let tmp = TempDir::new().unwrap();

    let output = deployer(tmp.path())
        .arg("--polarion-home")
        .arg(polarion.home())
        .args(["--polarion-version", "2310"])
        .arg("--mvn")
        .arg(mvn.path())
        .output()
        .unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("polarion version = 2310"));
    assert!(stdout.contains("mvn action = install"));
    assert!(stdout.contains("handling GroupA_1.0.0 ..."));

    let calls = mvn.calls();
    assert_eq!(calls.len(), 3);
    let plugins = polarion.plugins_path();
    assert_eq!(
        calls[0],
        format!(
            "install:install-file -Dfile={} -DgroupId=GroupA -DartifactId=a -Dversion=2310 \
             -Dpackaging=jar -DgeneratePom=false -DpomFile={}",
            plugins.join("GroupA_1.0.0").join("a.jar").display(),
            tmp.path().join("pom.xml").display()
        )
    );
    assert!(calls[1].contains("-DgroupId=GroupB -DartifactId=b "));
    assert!(calls[2].contains("-DgroupId=com.polarion.thirdparty -DartifactId=foo-1.0 "));

    let runtime = report_section(&stdout, RUNTIME_TITLE);
    assert_eq!(runtime.matches("<dependency>").count(), 2);
    assert!(runtime.find("<groupId>GroupA</groupId>") < runtime.find("<groupId>GroupB</groupId>"));

    let compile = report_section(&stdout, COMPILE_TITLE);
    assert_eq!(compile.matches("<dependency>").count(), 1);
    assert!(compile.contains("<artifactId>foo-1.0</artifactId>"));
    assert!(compile.contains("<scope>provided</scope>"));
}

#[test]
fn test_maven_receives_generated_pom_and_it_is_removed() {
    let polarion = PolarionFixture::new().bundle("com.polarion.alm_3.23", &["alm.jar"]).build().unwrap();
    let mvn = FakeMaven::succeeding().unwrap();
    let tmp = TempDir::new().unwrap();

    deployer(tmp.path())
        .arg("--polarion-home")
        .arg(polarion.home())
        .args(["--polarion-version", "2404"])
        .arg("--mvn")
        .arg(mvn.path())
        .assert()
        .success();

    let pom = mvn.pom(1).expect("mvn should have been given a POM");
    assert!(pom.contains("<groupId>com.polarion.alm</groupId>"));
    assert!(pom.contains("<artifactId>alm</artifactId>"));
    assert!(pom.contains("<version>2404</version>"));
    assert!(!tmp.path().join("pom.xml").exists());
}

#[test]
fn test_deploy_passes_repository_options() {
    let polarion = PolarionFixture::new().top_level_jar("guava.jar").build().unwrap();
    let mvn = FakeMaven::succeeding().unwrap();
    let tmp = TempDir::new().unwrap();

    deployer(tmp.path())
        .arg("--polarion-home")
        .arg(polarion.home())
        .args(["--polarion-version", "2310", "--action", "deploy"])
        .args(["--settings-path", "/etc/maven/settings.xml"])
        .args(["--repository-id", "nexus"])
        .args(["--repository-url", "https://nexus.example.com/repository/polarion"])
        .arg("--mvn")
        .arg(mvn.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("mvn action = deploy"));

    let calls = mvn.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with("deploy:deploy-file "));
    assert!(calls[0].ends_with(
        " --settings /etc/maven/settings.xml -DrepositoryId=nexus \
         -Durl=https://nexus.example.com/repository/polarion"
    ));
}

#[test]
fn test_config_file_supplies_defaults() {
    let polarion = PolarionFixture::new().top_level_jar("guava.jar").build().unwrap();
    let mvn = FakeMaven::succeeding().unwrap();
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("deployer.toml");
    std::fs::write(
        &config,
        format!(
            "maven_executable = \"{}\"\naction = \"deploy\"\nrepository_url = \"file:///srv/repo\"\n",
            mvn.path().display()
        ),
    )
    .unwrap();

    deployer(tmp.path())
        .arg("--polarion-home")
        .arg(polarion.home())
        .args(["--polarion-version", "2310"])
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    let calls = mvn.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].starts_with("deploy:deploy-file "));
    assert!(calls[0].ends_with(" -Durl=file:///srv/repo"));
}

#[test]
fn test_dry_run_does_not_invoke_maven() {
    let polarion = PolarionFixture::new().bundle("GroupA_1", &["a.jar"]).build().unwrap();
    let tmp = TempDir::new().unwrap();

    deployer(tmp.path())
        .arg("--polarion-home")
        .arg(polarion.home())
        .args(["--polarion-version", "2310", "--dry-run"])
        .args(["--mvn", "no-such-maven-binary-xyz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no-such-maven-binary-xyz install:install-file"))
        .stdout(predicate::str::contains("<groupId>GroupA</groupId>"));

    assert!(!tmp.path().join("pom.xml").exists());
}

#[test]
fn test_empty_plugins_directory_prints_empty_reports() {
    let polarion = PolarionFixture::new().build().unwrap();
    let mvn = FakeMaven::succeeding().unwrap();
    let tmp = TempDir::new().unwrap();

    deployer(tmp.path())
        .arg("--polarion-home")
        .arg(polarion.home())
        .args(["--polarion-version", "2310"])
        .arg("--mvn")
        .arg(mvn.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(RUNTIME_TITLE))
        .stdout(predicate::str::contains(COMPILE_TITLE))
        .stderr(predicate::str::contains("No artifacts found"));

    assert!(mvn.calls().is_empty());
}
