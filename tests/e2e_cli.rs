//! CLI end-to-end tests
//!
//! Tests for the mjpeg-forge command-line interface.

mod common;

use assert_cmd::prelude::*;
use common::{jpeg, write_frames};
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the mjpeg-forge binary
#[allow(deprecated)]
fn mjpeg_forge_cmd() -> Command {
    Command::cargo_bin("mjpeg-forge").unwrap()
}

#[test]
fn test_cli_no_args_shows_usage() {
    let mut cmd = mjpeg_forge_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_missing_output_arg() {
    let temp = tempdir().unwrap();
    let mut cmd = mjpeg_forge_cmd();
    cmd.arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = mjpeg_forge_cmd();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = mjpeg_forge_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mjpeg-forge"));
}

#[test]
fn test_cli_nonexistent_input() {
    let temp = tempdir().unwrap();
    let mut cmd = mjpeg_forge_cmd();
    cmd.arg("/nonexistent/frames")
        .arg(temp.path().join("out.mjpeg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_input_is_file() {
    let temp = tempdir().unwrap();
    let file = temp.path().join("frame.jpg");
    fs::write(&file, jpeg(4, 4)).unwrap();

    let mut cmd = mjpeg_forge_cmd();
    cmd.arg(&file)
        .arg(temp.path().join("out.mjpeg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a directory"));
}

#[test]
fn test_cli_empty_input_dir() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("readme.txt"), b"no frames here").unwrap();

    let mut cmd = mjpeg_forge_cmd();
    cmd.arg(input.path())
        .arg(output.path().join("out.mjpeg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No JPEG files"));
}

#[test]
fn test_cli_unopenable_output() {
    let input = tempdir().unwrap();
    write_frames(input.path(), &[("0001.jpg", jpeg(4, 4))]);

    let mut cmd = mjpeg_forge_cmd();
    cmd.arg(input.path())
        .arg(input.path().join("missing").join("out.mjpeg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not open output file"));
}

#[test]
fn test_cli_assembles_matching_frames() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let out_file = output.path().join("out.mjpeg");

    write_frames(
        input.path(),
        &[
            ("0001.jpg", jpeg(4, 4)),
            ("0002.jpg", jpeg(4, 4)),
            ("0003.jpg", jpeg(6, 4)),
        ],
    );

    let mut cmd = mjpeg_forge_cmd();
    cmd.arg(input.path())
        .arg(&out_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed frames: 2/3"))
        .stdout(predicate::str::contains("Resolution: 4x4"));

    let written = fs::read(&out_file).unwrap();
    assert_eq!(written, [jpeg(4, 4), jpeg(4, 4)].concat());
}

#[test]
fn test_cli_rejections_do_not_abort() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let out_file = output.path().join("out.mjpeg");

    write_frames(
        input.path(),
        &[
            ("0001.jpg", vec![0xFF, 0xD8, 0x00]),
            ("0002.jpg", vec![0xFF, 0xD8, 0xFF, 0xD9]),
            ("0003.jpg", jpeg(8, 2)),
        ],
    );

    let mut cmd = mjpeg_forge_cmd();
    cmd.arg(input.path())
        .arg(&out_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed frames: 1/3"))
        .stdout(predicate::str::contains("Resolution: 8x2"));

    assert_eq!(fs::read(&out_file).unwrap(), jpeg(8, 2));
}

#[test]
fn test_cli_no_accepted_frames() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let out_file = output.path().join("out.mjpeg");

    write_frames(input.path(), &[("0001.jpg", vec![0x00; 8])]);

    let mut cmd = mjpeg_forge_cmd();
    cmd.arg(input.path())
        .arg(&out_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed frames: 0/1"))
        .stdout(predicate::str::contains("Resolution: none"));

    assert!(fs::read(&out_file).unwrap().is_empty());
}

#[test]
fn test_cli_json_summary() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    write_frames(
        input.path(),
        &[("a.jpg", jpeg(16, 9)), ("b.jpeg", jpeg(9, 16))],
    );

    let mut cmd = mjpeg_forge_cmd();
    let assert = cmd
        .arg(input.path())
        .arg(output.path().join("out.mjpeg"))
        .arg("--json")
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["submitted"], 2);
    assert_eq!(summary["accepted"], 1);
    assert_eq!(summary["dimensions"]["width"], 16);
    assert_eq!(summary["dimensions"]["height"], 9);
    assert_eq!(summary["rejected"].as_array().unwrap().len(), 1);
}

#[test]
fn test_cli_dry_run_writes_nothing() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let out_file = output.path().join("out.mjpeg");

    write_frames(input.path(), &[("0001.jpg", jpeg(4, 4))]);

    let mut cmd = mjpeg_forge_cmd();
    cmd.arg(input.path())
        .arg(&out_file)
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed frames: 1/1"));

    assert!(!out_file.exists());
}

#[test]
fn test_cli_verify() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();

    write_frames(
        input.path(),
        &[("0001.jpg", jpeg(4, 4)), ("0002.jpg", jpeg(4, 4))],
    );

    let mut cmd = mjpeg_forge_cmd();
    cmd.arg(input.path())
        .arg(output.path().join("out.mjpeg"))
        .arg("--verify")
        .assert()
        .success();
}

#[test]
fn test_cli_verify_conflicts_with_dry_run() {
    let input = tempdir().unwrap();
    let mut cmd = mjpeg_forge_cmd();
    cmd.arg(input.path())
        .arg("out.mjpeg")
        .args(["--verify", "--dry-run"])
        .assert()
        .failure();
}

#[test]
fn test_cli_config_extensions() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let config_file = output.path().join("config.toml");

    write_frames(
        input.path(),
        &[("0001.jfif", jpeg(4, 4)), ("0002.jpg", jpeg(4, 4))],
    );
    fs::write(&config_file, "[input]\nextensions = [\"jfif\"]\n").unwrap();

    let mut cmd = mjpeg_forge_cmd();
    cmd.arg(input.path())
        .arg(output.path().join("out.mjpeg"))
        .arg("--config")
        .arg(&config_file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processed frames: 1/1"));
}
