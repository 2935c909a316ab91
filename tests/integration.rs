use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::File;
use std::io::Write;
use tempfile::TempDir;

fn quickcopy_cmd() -> Command {
    Command::cargo_bin("quickcopy").unwrap()
}

#[test]
fn test_help_output() {
    quickcopy_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("to the clipboard"))
        .stdout(predicate::str::contains("--title"))
        .stdout(predicate::str::contains("--url"))
        .stdout(predicate::str::contains("--site"));
}

#[test]
fn test_version_output() {
    quickcopy_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quickcopy"));
}

#[test]
fn test_missing_title_shows_error() {
    quickcopy_cmd()
        .args(["--url", "https://example.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_missing_url_shows_error() {
    quickcopy_cmd()
        .args(["--title", "Example"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_body_file_not_found() {
    quickcopy_cmd()
        .args(["-t", "Example", "-u", "https://example.com"])
        .arg("/nonexistent/body.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_binary_body_file_rejected() {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("binary.bin");

    let mut file = File::create(&file_path).unwrap();
    file.write_all(&[0x00, 0x01, 0x02, 0x03]).unwrap();

    quickcopy_cmd()
        .args(["-t", "Example", "-u", "https://example.com"])
        .arg(file_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read binary file"));
}

#[test]
fn test_verbose_flag_parses() {
    let result = quickcopy_cmd()
        .args(["-v", "-t", "Example", "-u", "https://example.com"])
        .assert();

    // May fail in headless CI due to clipboard access, but must not be an
    // argument parsing error.
    let output = result.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("error: unexpected argument"));
}

#[test]
fn test_quiet_flag_parses() {
    let result = quickcopy_cmd()
        .args(["-q", "-t", "Example", "-u", "https://example.com"])
        .assert();

    let output = result.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("error: unexpected argument"));
}

#[test]
fn test_stdin_dash_argument() {
    let result = quickcopy_cmd()
        .args(["-t", "Example", "-u", "https://example.com", "-"])
        .write_stdin("body from stdin")
        .assert();

    let output = result.get_output();
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("error: unexpected argument"));
}

// These tests require clipboard access and may be skipped in CI
#[test]
#[ignore = "Requires clipboard access"]
fn test_copy_title_and_url_to_clipboard() {
    quickcopy_cmd()
        .args(["-t", "Example", "-u", "https://example.com"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Copied"));
}

#[test]
#[ignore = "Requires clipboard access"]
fn test_copy_article_markdown_to_clipboard() {
    let dir = TempDir::new().unwrap();
    let file_path = dir.path().join("body.txt");

    let mut file = File::create(&file_path).unwrap();
    file.write_all("Sentence one. Sentence two.".as_bytes())
        .unwrap();

    quickcopy_cmd()
        .args(["-t", "T", "-u", "https://x.com", "-s", "S"])
        .arg(&file_path)
        .assert()
        .success()
        .stderr(predicate::str::contains("Copied"));
}

#[test]
#[ignore = "Requires clipboard access"]
fn test_quiet_mode_no_output_on_success() {
    quickcopy_cmd()
        .args(["-q", "-t", "Example", "-u", "https://example.com"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
