//! CLI tests for the read-only commands. None of these need CMake.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Source folder with a version file.
fn source_folder(version: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("Version.txt"), version).unwrap();
    temp
}

fn recipe_cmd(source: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("daiex-recipe");
    cmd.arg("--source-folder").arg(source.path());
    cmd.env_remove("DAIEX_PROFILE");
    cmd
}

fn package_id(source: &TempDir, extra: &[&str]) -> String {
    let output = recipe_cmd(source).arg("id").args(extra).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap().trim().to_string()
}

#[test]
fn help_lists_phases() {
    cargo_bin_cmd!("daiex-recipe")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("requirements"));
}

#[test]
fn info_reports_version_from_file() {
    let source = source_folder("3.1.4\n");
    recipe_cmd(&source)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("rs_daiex/3.1.4"))
        .stdout(predicate::str::contains("Apache-2.0"))
        .stdout(predicate::str::contains("zlib/1.2.12"));
}

#[test]
fn info_json_contains_configuration_and_components() {
    let source = source_folder("1.0.0");
    let output = recipe_cmd(&source)
        .args(["info", "--json", "-o", "inject_library_name_in_include=True"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["version"], "1.0.0");
    assert_eq!(
        json["configuration"]["definitions"]["CMAKE_INSTALL_INCLUDEDIR"],
        "include/daiex"
    );
    assert_eq!(json["package_info"]["components"]["daiex"]["libs"][0], "daiex");
    assert!(json["package_info"]["components"].get("dummy").is_none());
}

#[test]
fn requirements_include_gtest_only_with_tests() {
    let source = source_folder("1.0.0");
    recipe_cmd(&source)
        .arg("requirements")
        .assert()
        .success()
        .stdout(predicate::str::contains("pugixml/1.11"))
        .stdout(predicate::str::contains("cmake/3.22.3 (build)"))
        .stdout(predicate::str::contains("gtest").not());

    recipe_cmd(&source)
        .args(["requirements", "-o", "with_test=True"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gtest/1.10.0"));
}

#[test]
fn package_id_ignores_test_option() {
    let source = source_folder("1.0.0");
    let plain = package_id(&source, &[]);
    let with_tests = package_id(&source, &["-o", "with_test=True"]);
    let with_docs = package_id(&source, &["-o", "with_doc=True"]);

    assert_eq!(plain.len(), 40);
    assert_eq!(plain, with_tests);
    assert_ne!(plain, with_docs);
}

#[test]
fn overrides_before_and_after_subcommand_combine() {
    let source = source_folder("1.0.0");
    let docs_only = package_id(&source, &["-o", "with_doc=True"]);

    let output = recipe_cmd(&source)
        .args(["-o", "with_doc=True", "id", "-o", "with_test=True"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let split = String::from_utf8(output.stdout).unwrap().trim().to_string();
    assert_eq!(split, docs_only);

    let output = recipe_cmd(&source)
        .args(["-o", "with_doc=True", "requirements", "-o", "with_test=True"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().contains("gtest/1.10.0"));
}

#[test]
fn profile_settings_change_package_id() {
    let source = source_folder("1.0.0");
    let profile = source.path().join("debug.toml");
    std::fs::write(&profile, "[settings]\nbuild_type = \"debug\"\n").unwrap();

    let release = package_id(&source, &["-s", "build_type=Release"]);
    let debug = package_id(&source, &["--profile", profile.to_str().unwrap()]);
    assert_ne!(release, debug);
}

#[test]
fn missing_version_file_fails() {
    let source = TempDir::new().unwrap();
    recipe_cmd(&source)
        .arg("id")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Version.txt"));
}

#[test]
fn unknown_option_fails() {
    let source = source_folder("1.0.0");
    recipe_cmd(&source)
        .args(["id", "-o", "with_tests=True"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("with_tests"));
}
