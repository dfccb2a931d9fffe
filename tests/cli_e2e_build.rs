//! End-to-end tests for the `amalgamate` CLI
//!
//! These tests invoke the actual CLI binary and validate its behavior
//! from a user's perspective.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_fs::prelude::*;
use predicates::prelude::*;

/// Test that --help flag shows help information
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_help() {
    let mut cmd = cargo_bin_cmd!("amalgamate");

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Collapse a header-only library into a single header",
        ));
}

/// Test that a missing base directory produces an error
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_missing_base_dir() {
    let temp = assert_fs::TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("amalgamate");

    cmd.current_dir(temp.path())
        .arg("--base")
        .arg("no-such-dir")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Base directory not found"));
}

/// Test that a missing --config file produces an error
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_missing_config() {
    let mut cmd = cargo_bin_cmd!("amalgamate");

    cmd.arg("--config")
        .arg("/nonexistent/config.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

/// Test that a missing output directory produces an error and no file
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_missing_output_dir() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Source/A.h").write_str("int a;\n").unwrap();

    let mut cmd = cargo_bin_cmd!("amalgamate");

    cmd.current_dir(temp.path())
        .arg("--base")
        .arg("Source")
        .arg("--output")
        .arg("Distribution")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory does not exist"));

    temp.child("Distribution/amalgamated.h")
        .assert(predicate::path::missing());
}

/// Test the full pipeline: dependency order, hoisting, markers
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_build_amalgamates_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Source/A.h")
        .write_str("#pragma once\n#include \"B.h\"\n#include <vector>\nstruct A { B b; };\n")
        .unwrap();
    temp.child("Source/B.h")
        .write_str("#pragma once\nstruct B {};\n")
        .unwrap();
    temp.child("Distribution/.keep").write_str("").unwrap();

    let mut cmd = cargo_bin_cmd!("amalgamate");

    cmd.current_dir(temp.path())
        .arg("--base")
        .arg("Source")
        .arg("--output")
        .arg("Distribution")
        .arg("--name")
        .arg("Lib")
        .assert()
        .success()
        .stdout(predicate::str::contains("Amalgamated 2 headers"));

    let out = temp.child("Distribution/Lib.h");
    out.assert(predicate::path::exists());

    let text = std::fs::read_to_string(out.path()).unwrap();
    assert!(text.contains("#include <vector>"));
    assert!(text.find("struct B {};").unwrap() < text.find("struct A { B b; };").unwrap());
    assert!(text.contains("// Begin File:"));
    assert!(text.contains("// End File:"));
}

/// Test that --strip removes comments from the emitted file
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_build_with_strip() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Source/A.h")
        .write_str("int a; // gone\nconst char* s = \"// kept\";\n")
        .unwrap();
    temp.child("dist/.keep").write_str("").unwrap();

    let mut cmd = cargo_bin_cmd!("amalgamate");

    cmd.current_dir(temp.path())
        .arg("--base")
        .arg("Source")
        .arg("--output")
        .arg("dist")
        .arg("--name")
        .arg("Lib")
        .arg("--strip")
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let text = std::fs::read_to_string(temp.child("dist/Lib.h").path()).unwrap();
    assert!(!text.contains("// gone"));
    assert!(text.contains("\"// kept\""));
}

/// Test that a config file supplies defaults the CLI did not set
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_build_reads_default_config_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("include/A.h").write_str("int a;\n").unwrap();
    temp.child("out/.keep").write_str("").unwrap();
    temp.child(".amalgamate.yaml")
        .write_str("base: include\noutput: out\nname: fromconfig\n")
        .unwrap();

    let mut cmd = cargo_bin_cmd!("amalgamate");

    cmd.current_dir(temp.path()).arg("--quiet").assert().success();

    temp.child("out/fromconfig.h").assert(predicate::path::exists());
}

/// Test that two runs over an unchanged tree are byte-identical
#[test]
#[cfg_attr(not(feature = "integration-tests"), ignore)]
fn test_build_is_deterministic() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("Source/A.h")
        .write_str("#include \"B.h\"\n#include <memory>\nint a;\n")
        .unwrap();
    temp.child("Source/B.h").write_str("int b;\n").unwrap();
    temp.child("out/.keep").write_str("").unwrap();

    let run = |name: &str| {
        let mut cmd = cargo_bin_cmd!("amalgamate");
        cmd.current_dir(temp.path())
            .arg("--base")
            .arg("Source")
            .arg("--output")
            .arg("out")
            .arg("--name")
            .arg(name)
            .arg("--quiet")
            .assert()
            .success();
        std::fs::read_to_string(temp.child(format!("out/{}.h", name)).path()).unwrap()
    };

    assert_eq!(run("first"), run("second"));
}
