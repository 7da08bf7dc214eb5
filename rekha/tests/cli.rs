//! Command-line front end tests.

use std::io::Write;
use std::process::{Command, Stdio};

const SINGLE_ROW_REPORT: &str = "number of circles: 0\nnumber of lines: 1\n0.0 0.0 9.0 0.0\n";

fn rekha() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rekha"))
}

#[test]
fn test_reads_input_file() {
    let output = rekha()
        .args(["--seed", "1", "tests/fixtures/single_row.w"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), SINGLE_ROW_REPORT);
}

#[test]
fn test_reads_standard_input() {
    let mut child = rekha()
        .args(["--seed", "2"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"10\n1\n##########\n")
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), SINGLE_ROW_REPORT);
}

#[test]
fn test_debug_does_not_change_report() {
    let output = rekha()
        .args(["--debug", "--seed", "3", "tests/fixtures/single_row.w"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), SINGLE_ROW_REPORT);
}

#[test]
fn test_config_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("strict.yaml");
    // Ten pixels can never reach eleven inliers
    std::fs::write(&config, "detection:\n  min_inliers: 11\n").unwrap();

    let output = rekha()
        .arg("--config")
        .arg(&config)
        .arg("tests/fixtures/single_row.w")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "number of circles: 0\nnumber of lines: 0\n"
    );
}

#[test]
fn test_other_extension_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("row.txt");
    std::fs::write(&input, "10\n1\n##########\n").unwrap();

    let output = rekha().arg("-s").arg("4").arg(&input).output().unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), SINGLE_ROW_REPORT);
}

#[test]
fn test_malformed_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.w");
    std::fs::write(&input, "3\n2\n###\n#\n").unwrap();

    let output = rekha().arg(&input).output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_invalid_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("bad.yaml");
    std::fs::write(&config, "detection:\n  inlier_tolerance: -1.0\n").unwrap();

    let output = rekha()
        .arg("--config")
        .arg(&config)
        .arg("tests/fixtures/single_row.w")
        .output()
        .unwrap();

    assert!(!output.status.success());
}
