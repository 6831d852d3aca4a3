//! CLI integration tests
use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("sitesplit").unwrap()
}

fn fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_directory_build() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["--project", "coop", "-o", tmp.path().to_str().unwrap()])
        .arg(fixture_path("pages"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Build complete"));

    let out = tmp.path().join("coop");
    assert!(out.join("home.html").is_file());
    assert!(out.join("about.html").is_file());
    assert!(out.join("style.css").is_file());
    assert!(out.join("scripts/chatbot.js").is_file());
    assert!(out.join("assets/logo.png").is_file());
    assert!(tmp.path().join("coop.zip").is_file());
}

#[test]
fn test_cli_single_file_build() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["--file", &fixture_path("bare.html")])
        .args(["--project", "onepage", "-o", tmp.path().to_str().unwrap()])
        .assert()
        .success();

    assert!(tmp.path().join("onepage/index.html").is_file());
    assert!(tmp.path().join("onepage.zip").is_file());
}

#[test]
fn test_cli_missing_file_fails() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["--file", "nonexistent.html", "-o", tmp.path().to_str().unwrap()])
        .assert()
        .failure();
}

#[test]
fn test_cli_no_archive() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["--no-archive", "--project", "coop", "-o", tmp.path().to_str().unwrap()])
        .arg(fixture_path("pages"))
        .assert()
        .success();

    assert!(tmp.path().join("coop").is_dir());
    assert!(!tmp.path().join("coop.zip").exists());
}

#[test]
fn test_cli_json_report() {
    let tmp = TempDir::new().unwrap();

    let output = cmd()
        .args(["--json", "--project", "coop", "-o", tmp.path().to_str().unwrap()])
        .arg(fixture_path("pages"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON report");
    assert_eq!(report["pages"], serde_json::json!(["about.html", "home.html"]));
    assert_eq!(report["script_fragments"]["chatbot"], 1);
}

#[test]
fn test_cli_verbose_steps() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["-v", "--project", "coop", "-o", tmp.path().to_str().unwrap()])
        .arg(fixture_path("pages"))
        .assert()
        .success()
        .stderr(predicate::str::contains("Preparing workspace"))
        .stderr(predicate::str::contains("Restructuring"));
}

#[test]
fn test_cli_skips_unreadable_page() {
    let tmp = TempDir::new().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();
    fs::write(src.join("good.html"), "<body><p>ok</p></body>").unwrap();
    fs::write(src.join("bad.html"), [0xff, 0xfe, 0x00, 0x80]).unwrap();

    cmd()
        .args(["--project", "partial", "-o", tmp.path().to_str().unwrap()])
        .arg(src.to_str().unwrap())
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping"));

    assert!(tmp.path().join("partial/good.html").is_file());
    assert!(!tmp.path().join("partial/bad.html").exists());
}

#[test]
fn test_cli_rewritten_page_contents() {
    let tmp = TempDir::new().unwrap();

    cmd()
        .args(["--project", "coop", "-o", tmp.path().to_str().unwrap()])
        .arg(fixture_path("pages"))
        .assert()
        .success();

    let home = fs::read_to_string(tmp.path().join("coop/home.html")).unwrap();
    assert!(home.contains(r#"<link rel="stylesheet" href="style.css">"#));
    assert!(home.contains(r#"<script src="scripts/main.js"></script>"#));
    assert!(!home.contains("<style"));
}
