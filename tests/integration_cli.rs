//! End-to-end tests driving the targetmap binary against a realistic
//! target-definition fixture.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use targetmap::components::ComponentMap;

fn targetmap() -> Command {
    Command::cargo_bin("targetmap").unwrap()
}

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("abslTargets.cmake")
}

fn extract_fixture(dir: &Path) -> PathBuf {
    let output = dir.join("components.json");
    targetmap()
        .arg("extract")
        .arg(fixture())
        .arg("--namespace")
        .arg("absl")
        .arg("--platform")
        .arg("linux")
        .arg("--output")
        .arg(&output)
        .assert()
        .success();
    output
}

#[test]
fn extract_builds_the_expected_component_map() {
    let temp = TempDir::new().unwrap();
    let record = extract_fixture(temp.path());

    let map = ComponentMap::load(&record).unwrap();
    assert_eq!(map.len(), 5);

    // Key order is first-encounter order in the source text
    let names: Vec<_> = map.names().collect();
    assert_eq!(
        names,
        vec![
            "absl_config",
            "absl_raw_logging_internal",
            "absl_base",
            "absl_synchronization",
            "absl_time"
        ]
    );

    // Interface target: definitions but no artifact
    let config = map.get("absl_config").unwrap();
    assert_eq!(config.cmake_target, "config");
    assert!(config.libs.is_empty());
    assert_eq!(config.defines, vec!["ABSL_CONSUME_DLL"]);

    // Static target with internal and external link dependencies
    let base = map.get("absl_base").unwrap();
    assert_eq!(base.libs, vec!["absl_base"]);
    assert_eq!(base.defines, vec!["ABSL_LOW_LEVEL_ALLOC_MISSING"]);
    assert_eq!(base.requires, vec!["absl_config", "absl_raw_logging_internal"]);
    assert_eq!(base.system_libs, vec!["pthread", "rt"]);
    assert!(base.frameworks.is_empty());

    // `absl::time` was referenced before its declaration; the placeholder
    // got filled in, and the unrecognized vendor token was dropped
    let synchronization = map.get("absl_synchronization").unwrap();
    assert_eq!(synchronization.requires, vec!["absl_base", "absl_time"]);
    assert_eq!(synchronization.system_libs, vec!["pthread"]);

    // CoreFoundation is not a Linux system library
    let time = map.get("absl_time").unwrap();
    assert!(time.libs.is_empty());
    assert_eq!(time.requires, vec!["absl_base"]);
    assert!(time.system_libs.is_empty());
    assert!(time.frameworks.is_empty());
}

#[test]
fn extract_reports_a_summary() {
    let temp = TempDir::new().unwrap();
    targetmap()
        .arg("extract")
        .arg(fixture())
        .args(["--namespace", "absl", "--platform", "linux"])
        .arg("--output")
        .arg(temp.path().join("components.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("5 components"));
}

#[test]
fn extract_quiet_suppresses_the_summary() {
    let temp = TempDir::new().unwrap();
    targetmap()
        .arg("--quiet")
        .arg("extract")
        .arg(fixture())
        .args(["--namespace", "absl", "--platform", "linux"])
        .arg("--output")
        .arg(temp.path().join("components.json"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn extract_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let first = extract_fixture(temp.path());
    let bytes = fs::read(&first).unwrap();

    let second = extract_fixture(temp.path());
    assert_eq!(fs::read(&second).unwrap(), bytes);
}

#[test]
fn extract_macos_resolves_frameworks() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("components.json");
    targetmap()
        .arg("extract")
        .arg(fixture())
        .args(["--namespace", "absl", "--platform", "macos"])
        .arg("--output")
        .arg(&record)
        .assert()
        .success();

    let map = ComponentMap::load(&record).unwrap();
    let time = map.get("absl_time").unwrap();
    assert_eq!(time.frameworks, vec!["CoreFoundation"]);
    // The Linux-only tokens resolve to nothing on macOS
    let base = map.get("absl_base").unwrap();
    assert!(base.system_libs.is_empty());
}

#[test]
fn extract_without_namespace_fails_with_guidance() {
    targetmap()
        .arg("extract")
        .arg(fixture())
        .args(["--platform", "linux"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--namespace"));
}

#[test]
fn extract_missing_input_is_fatal() {
    targetmap()
        .arg("extract")
        .arg("no-such-file.cmake")
        .args(["--namespace", "absl", "--platform", "linux"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-file.cmake"));
}

#[test]
fn extract_reads_defaults_from_config_file() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("targetmap.toml"),
        "[package]\nnamespace = \"absl\"\nplatform = \"linux\"\n",
    )
    .unwrap();

    targetmap()
        .current_dir(temp.path())
        .arg("extract")
        .arg(fixture())
        .assert()
        .success();

    let map = ComponentMap::load(&temp.path().join("components.json")).unwrap();
    assert_eq!(map.len(), 5);
}

#[test]
fn register_emits_one_call_per_component_in_order() {
    let temp = TempDir::new().unwrap();
    let record = extract_fixture(temp.path());

    let assert = targetmap().arg("register").arg(&record).assert().success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let calls: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(calls.len(), 5);
    let names: Vec<_> = calls.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(
        names,
        vec![
            "absl_config",
            "absl_raw_logging_internal",
            "absl_base",
            "absl_synchronization",
            "absl_time"
        ]
    );

    // Every call carries all attributes; empty ones as empty lists
    assert_eq!(calls[2]["cmake_target"], "base");
    assert_eq!(calls[2]["system_libs"], serde_json::json!(["pthread", "rt"]));
    assert_eq!(calls[0]["libs"], serde_json::json!([]));
    assert_eq!(calls[0]["requires"], serde_json::json!([]));
}

#[test]
fn register_missing_record_is_fatal() {
    targetmap()
        .arg("register")
        .arg("no-such-components.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("component map not found"));
}

#[test]
fn validate_accepts_an_extracted_record() {
    let temp = TempDir::new().unwrap();
    let record = extract_fixture(temp.path());

    targetmap()
        .arg("validate")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid"));
}

#[test]
fn validate_rejects_unknown_fields() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("components.json");
    fs::write(
        &record,
        r#"{"absl_base": {"cmake_target": "base", "extra_field": 1}}"#,
    )
    .unwrap();

    targetmap()
        .arg("validate")
        .arg(&record)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse component map"));
}

#[test]
fn validate_rejects_dangling_requirements() {
    let temp = TempDir::new().unwrap();
    let record = temp.path().join("components.json");
    fs::write(
        &record,
        r#"{"absl_base": {"cmake_target": "base", "requires": ["absl_ghost"]}}"#,
    )
    .unwrap();

    targetmap()
        .arg("validate")
        .arg(&record)
        .assert()
        .failure()
        .stderr(predicate::str::contains("absl_ghost"));
}

#[test]
fn list_renders_a_table() {
    let temp = TempDir::new().unwrap();
    let record = extract_fixture(temp.path());

    targetmap()
        .arg("list")
        .arg(&record)
        .assert()
        .success()
        .stdout(predicate::str::contains("absl_base"))
        .stdout(predicate::str::contains("5 components"));
}

#[test]
fn list_json_round_trips_the_record() {
    let temp = TempDir::new().unwrap();
    let record = extract_fixture(temp.path());

    let assert = targetmap()
        .arg("list")
        .arg(&record)
        .args(["--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let listed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let on_disk: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&record).unwrap()).unwrap();
    assert_eq!(listed, on_disk);
}
