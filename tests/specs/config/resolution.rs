//! Behavioral specs for config resolution.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Defaults apply without a config file
#[test]
fn defaults_without_config() {
    Project::empty()
        .cmd(&["config"])
        .assert()
        .success()
        .stdout("variant = additive\nconstant = 10\n");
}

/// > twostage.toml in the working directory is picked up
#[test]
fn discovered_config_selects_variant() {
    Project::with_config("version = 1\n\n[pipeline]\nvariant = \"subtractive\"\n")
        .cmd(&["run", "10", "4"])
        .assert()
        .success()
        .stdout("1.2\n");
}

/// > twostage.toml in a parent directory is picked up
#[test]
fn config_found_from_subdirectory() {
    let project = Project::with_config("version = 1\n\n[pipeline]\nconstant = 2\n");
    let nested = project.path().join("nested");
    std::fs::create_dir(&nested).unwrap();

    twostage_cmd()
        .args(["run", "1", "2"])
        .current_dir(&nested)
        .assert()
        .success()
        .stdout("6\n");
}

/// > --config points at an explicit file
#[test]
fn explicit_config_flag() {
    let project = Project::empty();
    let path = project.path().join("custom.toml");
    std::fs::write(&path, "version = 1\n\n[pipeline]\nconstant = 4\n").unwrap();

    project
        .cmd(&["run", "1", "1", "--config", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("8\n");
}

/// > TWOSTAGE_CONFIG points at an explicit file
#[test]
fn config_env_var() {
    let project = Project::empty();
    let path = project.path().join("env.toml");
    std::fs::write(&path, "version = 1\n\n[pipeline]\nvariant = \"subtractive\"\n").unwrap();

    project
        .cmd(&["run", "20", "10"])
        .env("TWOSTAGE_CONFIG", &path)
        .assert()
        .success()
        .stdout("2.0\n");
}

/// > A missing explicit config file is an error
#[test]
fn missing_explicit_config_fails() {
    Project::empty()
        .cmd(&["config", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("failed to read"));
}

/// > --constant overrides the file value
#[test]
fn constant_flag_overrides_config() {
    Project::with_config("version = 1\n\n[pipeline]\nconstant = 3\n")
        .cmd(&["run", "1", "1", "--constant", "100"])
        .assert()
        .success()
        .stdout("200\n");
}

/// > Switching variant on the command line drops the file's constant
#[test]
fn variant_flag_uses_its_own_default_constant() {
    Project::with_config("version = 1\n\n[pipeline]\nconstant = 3\n")
        .cmd(&["run", "10", "4", "--variant", "subtractive"])
        .assert()
        .success()
        .stdout("1.2\n");
}

/// > JSON config output
#[test]
fn config_json_output() {
    let output = Project::with_config("version = 1\n\n[pipeline]\nvariant = \"subtractive\"\nconstant = 2.5\n")
        .cmd(&["config", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value, serde_json::json!({ "variant": "subtractive", "constant": 2.5 }));
}
