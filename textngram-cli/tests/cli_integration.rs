//! Integration tests for the textngram CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_split_file_bigrams() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split").arg("-i").arg(fixture_path("greeting.txt"));

    cmd.assert()
        .success()
        .stdout("こん\nんに\nにち\nちは\nは世\n世界\n界！\n");
}

#[test]
fn test_split_literal_text_joined() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split")
        .arg("-t")
        .arg("こんにちは世界！")
        .arg("-n")
        .arg("3")
        .arg("-f")
        .arg("joined");

    cmd.assert()
        .success()
        .stdout("こんに,んにち,にちは,ちは世,は世界,世界！\n");
}

#[test]
fn test_indexed_output() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("greeting.txt"))
        .arg("-f")
        .arg("indexed");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("0 : こん\n"))
        .stdout(predicate::str::contains("6 : 界！\n"));
}

#[test]
fn test_shift_jis_input() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("greeting-sjis.txt"))
        .arg("-e")
        .arg("Shift_JIS")
        .arg("-f")
        .arg("joined");

    cmd.assert()
        .success()
        .stdout("こん,んに,にち,ちは,は世,世界,界！\n");
}

#[test]
fn test_shift_jis_input_without_encoding_fails() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("greeting-sjis.txt"));

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("malformed UTF-8 input"));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("greeting.txt"))
        .arg("-f")
        .arg("json");

    let output = cmd.assert().success().get_output().stdout.clone();
    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed[0]["count"], 7);
    assert_eq!(parsed[0]["text_length"], 8);
    assert_eq!(parsed[0]["ngrams"][5], "世界");
}

#[test]
fn test_config_file_applies() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("greeting.txt"))
        .arg("-c")
        .arg(fixture_path("trigram.toml"));

    cmd.assert()
        .success()
        .stdout("こんに,んにち,にちは,ちは世,は世界,世界！\n");
}

#[test]
fn test_flags_override_config_file() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("greeting.txt"))
        .arg("-c")
        .arg(fixture_path("trigram.toml"))
        .arg("-n")
        .arg("7");

    cmd.assert()
        .success()
        .stdout("こんにちは世界,んにちは世界！\n");
}

#[test]
fn test_stdin_input() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split").arg("-i").arg("-").write_stdin("abcd");

    cmd.assert().success().stdout("ab\nbc\ncd\n");
}

#[test]
fn test_window_larger_than_text_is_empty() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split").arg("-t").arg("ab").arg("-n").arg("5");

    cmd.assert().success().stdout("");
}

#[test]
fn test_zero_window_rejected() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split").arg("-t").arg("abc").arg("-n").arg("0");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid window size 0"));
}

#[test]
fn test_unknown_encoding_rejected() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split").arg("-t").arg("abc").arg("-e").arg("klingon");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported encoding: klingon"));
}

#[test]
fn test_missing_files() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split").arg("-i").arg("tests/fixtures/nope-*.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let out = temp_dir.path().join("ngrams.txt");

    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split")
        .arg("-t")
        .arg("abc")
        .arg("-o")
        .arg(&out);

    cmd.assert().success().stdout("");
    assert_eq!(fs::read_to_string(&out).unwrap(), "ab\nbc\n");
}

#[test]
fn test_generate_and_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("textngram.toml");

    Command::cargo_bin("textngram")
        .unwrap()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration generated"));

    Command::cargo_bin("textngram")
        .unwrap()
        .arg("validate")
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Window size: 2"))
        .stdout(predicate::str::contains("Encoding: UTF-8"));
}

#[test]
fn test_list_encodings() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("list").arg("encodings");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Shift_JIS"))
        .stdout(predicate::str::contains("EUC-JP"));
}

#[test]
fn test_input_and_text_conflict() {
    let mut cmd = Command::cargo_bin("textngram").unwrap();
    cmd.arg("split")
        .arg("-i")
        .arg(fixture_path("greeting.txt"))
        .arg("-t")
        .arg("abc");

    cmd.assert().failure();
}
