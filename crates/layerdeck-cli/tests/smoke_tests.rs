//! Smoke tests for the layerdeck CLI
//!
//! These tests run the real binary against hierarchies written to a
//! temporary directory.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Get a command for the layerdeck binary
fn layerdeck() -> Command {
    Command::cargo_bin("layerdeck").expect("layerdeck binary should exist")
}

const IMAGE: &str = "\
layers:
  - name: A
  - name: B
    visible: true
    children:
      - name: C
      - name: D
";

/// Write `talk.yaml` and, when given, `talk.anim`
fn deck(anim: Option<&str>) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("talk.yaml"), IMAGE).unwrap();
    if let Some(anim) = anim {
        fs::write(temp.path().join("talk.anim"), anim).unwrap();
    }
    temp
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    layerdeck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_flag() {
    layerdeck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("build"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("expand"));
}

#[test]
fn test_no_args_fails() {
    layerdeck().assert().failure();
}

// ============================================================================
// Subcommand Tests
// ============================================================================

#[test]
fn test_tree_command() {
    let temp = deck(None);
    layerdeck()
        .current_dir(temp.path())
        .args(["tree", "talk.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[x] B"))
        .stdout(predicate::str::contains("[ ] C"))
        .stdout(predicate::str::contains("Total: 4 layers, 1 visible"));
}

#[test]
fn test_expand_command() {
    let temp = deck(Some("B/{C D}  # both\n"));
    layerdeck()
        .current_dir(temp.path())
        .args(["expand", "talk.anim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B/C B/D"))
        .stdout(predicate::str::contains("#").not());
}

#[test]
fn test_check_command() {
    let temp = deck(Some("A\nB/C\nsecond:\n+ B/D\n"));
    layerdeck()
        .current_dir(temp.path())
        .args(["check", "talk.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("talk.yaml: 2 blocks, 3 slides"));
}

#[test]
fn test_check_unknown_layer_fails_with_location() {
    let temp = deck(Some("A\nZ\n"));
    layerdeck()
        .current_dir(temp.path())
        .args(["check", "talk.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("talk.anim:2:"))
        .stderr(predicate::str::contains("Z"));
}

#[test]
fn test_build_writes_manifests() {
    let temp = deck(Some("A\nB/C\nsecond:\n+ B/D\n"));
    layerdeck()
        .current_dir(temp.path())
        .args(["-q", "build", "talk.yaml", "-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Built 2 blocks, 3 slides"));

    let first = fs::read_to_string(temp.path().join("out/talk.json")).unwrap();
    assert!(first.contains("talk-part-01.svg"));
    let second = fs::read_to_string(temp.path().join("out/talk-second.json")).unwrap();
    assert!(second.contains("talk-second.pdf"));
    assert!(second.contains("B/D"));
}

#[test]
fn test_build_json_summary() {
    let temp = deck(None);
    layerdeck()
        .current_dir(temp.path())
        .args(["-q", "build", "talk.yaml", "-o", "out", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"written\""));
    assert!(temp.path().join("out/talk.json").exists());
}

#[test]
fn test_build_missing_image_fails() {
    let temp = TempDir::new().unwrap();
    layerdeck()
        .current_dir(temp.path())
        .args(["build", "missing.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("image not found"));
}

#[test]
fn test_build_repeated_block_fails() {
    let temp = deck(Some("intro:\nA\nintro:\nB\n"));
    layerdeck()
        .current_dir(temp.path())
        .args(["build", "talk.yaml", "-o", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("talk.anim:3:"))
        .stderr(predicate::str::contains("defined twice"));
    assert!(!temp.path().join("out").exists());
}

#[test]
fn test_expand_keeps_hyphenated_names() {
    let temp = deck(Some("my-deck/{left-box right}\n"));
    layerdeck()
        .current_dir(temp.path())
        .args(["expand", "talk.anim"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-deck/left-box my-deck/right"));
}
