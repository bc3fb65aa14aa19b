//! End-to-end tests for the `info` command.

mod common;

use common::prelude::*;

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_info_help() {
    let mut cmd = cargo_bin_cmd!("faces-config");

    cmd.arg("info")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Show information about the descriptors a load would merge",
        ));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_info_summary() {
    let fixture = TestFixture::new()
        .with_settings(settings::PARALLEL)
        .with_library(
            "lib-a",
            &descriptors::named("A", &descriptors::bean("one", "One", "")),
        )
        .with_library(
            "lib-b",
            &descriptors::named("B", &descriptors::bean("two", "Two", "")),
        )
        .with_app_descriptor(&descriptors::absolute(&["B", "others"], ""));

    fixture
        .command()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[INFO] Sources"))
        .stdout(predicate::str::contains("  - web-app"))
        .stdout(predicate::str::contains("  - meta-inf"))
        .stdout(predicate::str::contains("Execution: parallel (4 threads)"))
        .stdout(predicate::str::contains("Present: yes"))
        .stdout(predicate::str::contains("Absolute ordering: B, others"))
        .stdout(predicate::str::contains("Documents: 3"))
        .stdout(predicate::str::contains("Managed beans: 2"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_info_without_application_descriptor() {
    let fixture = TestFixture::new()
        .with_settings(settings::WEB_APP_AND_LIBS)
        .with_library("lib-a", &descriptors::named("A", ""));

    fixture
        .command()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Execution: inline"))
        .stdout(predicate::str::contains("Present: no"))
        .stdout(predicate::str::contains("Absolute ordering: none"));
}

#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_info_no_sources() {
    let fixture = TestFixture::new().with_settings("parallel: true\n");

    fixture
        .command()
        .arg("info")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No descriptor sources configured"));
}
