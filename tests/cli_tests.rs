//! Integration tests for CLI

use assert_cmd::Command;
use git2::{Repository, Signature};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn intake() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("repo-intake"))
}

fn init_source_repo(dir: &Path) {
    fs::create_dir_all(dir.join("src")).expect("mkdir src");
    fs::write(dir.join("README.md"), "# Sample\n\nA sample repository.\n").expect("write readme");
    fs::write(dir.join("src/main.rs"), "fn main() {}\n").expect("write main");

    let repo = Repository::init(dir).expect("init");
    let mut index = repo.index().expect("index");
    index.add_path(Path::new("README.md")).expect("add readme");
    index.add_path(Path::new("src/main.rs")).expect("add main");
    index.write().expect("write index");
    let tree_id = index.write_tree().expect("write tree");
    let tree = repo.find_tree(tree_id).expect("find tree");
    let sig = Signature::now("Test", "test@example.com").expect("signature");
    repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[]).expect("commit");
}

#[test]
fn test_cli_version() {
    intake().arg("--version").assert().success().stdout(predicate::str::contains("repo-intake"));
}

#[test]
fn test_cli_help() {
    intake()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetch repositories"))
        .stdout(predicate::str::contains("clone"))
        .stdout(predicate::str::contains("tree"))
        .stdout(predicate::str::contains("readme"))
        .stdout(predicate::str::contains("overview"));
}

#[test]
fn test_tree_json_skips_hidden_directories() {
    let tmp = TempDir::new().expect("tmp");
    let root = tmp.path().join("repo");
    fs::create_dir_all(root.join(".git/refs")).expect("mkdir .git");
    fs::create_dir_all(root.join("sub")).expect("mkdir sub");
    fs::write(root.join("a.txt"), "a").expect("write a");
    fs::write(root.join("sub/c.md"), "c").expect("write c");

    let output = intake()
        .current_dir(tmp.path())
        .args(["tree", "repo", "--json"])
        .output()
        .expect("run tree");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    let dirs = value.as_object().expect("object");
    assert_eq!(dirs.len(), 2);
    assert_eq!(value["."]["files"], serde_json::json!(["a.txt"]));
    assert_eq!(value["sub"]["files"], serde_json::json!(["c.md"]));
}

#[test]
fn test_tree_missing_path_fails() {
    let tmp = TempDir::new().expect("tmp");
    intake()
        .current_dir(tmp.path())
        .args(["tree", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to summarize"));
}

#[test]
fn test_readme_prints_trimmed_content() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("readme.txt"), "  hello\n").expect("write");

    intake()
        .current_dir(tmp.path())
        .args(["readme", "."])
        .assert()
        .success()
        .stdout("hello\n");
}

#[test]
fn test_readme_missing_prints_sentinel() {
    let tmp = TempDir::new().expect("tmp");

    intake()
        .current_dir(tmp.path())
        .args(["readme", "."])
        .assert()
        .success()
        .stdout("No README file found in the repository.\n");
}

#[test]
fn test_readme_json_distinguishes_unreadable() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("README.md"), [0xff, 0xfe, 0xfd]).expect("write");

    intake()
        .current_dir(tmp.path())
        .args(["readme", ".", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"unreadable\""))
        .stdout(predicate::str::contains("README.md"));
}

#[test]
fn test_readme_names_from_config_file() {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("repo-intake.toml"), "readme_names = ['DOCS.md']\n")
        .expect("write config");
    fs::write(tmp.path().join("DOCS.md"), "docs here").expect("write docs");

    intake().current_dir(tmp.path()).args(["readme", "."]).assert().success().stdout("docs here\n");
}

#[test]
fn test_clone_existing_directory_is_reused() {
    let tmp = TempDir::new().expect("tmp");
    fs::create_dir(tmp.path().join("name")).expect("mkdir");

    intake()
        .current_dir(tmp.path())
        .args(["clone", "https://example.invalid/org/name.git/", "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("name"));
}

#[test]
fn test_clone_status_respects_rust_log() {
    let tmp = TempDir::new().expect("tmp");
    fs::create_dir(tmp.path().join("name")).expect("mkdir");

    intake()
        .current_dir(tmp.path())
        .env("RUST_LOG", "info")
        .args(["clone", "https://example.invalid/org/name.git/", "--no-progress"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    intake()
        .current_dir(tmp.path())
        .env("RUST_LOG", "warn")
        .args(["clone", "https://example.invalid/org/name.git/", "--no-progress"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists").not());
}

#[test]
fn test_clone_status_shown_by_default() {
    let tmp = TempDir::new().expect("tmp");
    fs::create_dir(tmp.path().join("name")).expect("mkdir");

    intake()
        .current_dir(tmp.path())
        .env_remove("RUST_LOG")
        .args(["clone", "https://example.invalid/org/name.git/", "--no-progress"])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_clone_local_repository_into_workspace() {
    let tmp = TempDir::new().expect("tmp");
    let source = tmp.path().join("upstream").join("sample");
    init_source_repo(&source);
    let workspace = tmp.path().join("work");
    fs::create_dir(&workspace).expect("mkdir work");

    intake()
        .current_dir(tmp.path())
        .env("REPO_INTAKE_WORKSPACE", &workspace)
        .args(["clone", source.to_str().expect("utf8 path"), "--no-progress"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample"));

    assert!(workspace.join("sample/README.md").is_file());
    assert!(workspace.join("sample/src/main.rs").is_file());
}

#[test]
fn test_clone_failure_json_has_error_field() {
    let tmp = TempDir::new().expect("tmp");
    let missing = tmp.path().join("nowhere").join("gone");

    let output = intake()
        .current_dir(tmp.path())
        .args(["clone", missing.to_str().expect("utf8 path"), "--no-progress", "--json"])
        .output()
        .expect("run clone");
    assert!(!output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert!(value["error"].as_str().is_some_and(|msg| !msg.is_empty()));
    assert!(!tmp.path().join("gone").exists());
}

#[test]
fn test_overview_json_combines_tree_and_readme() {
    let tmp = TempDir::new().expect("tmp");
    let source = tmp.path().join("upstream").join("sample.git");
    init_source_repo(&source);
    let workspace = tmp.path().join("work");
    fs::create_dir(&workspace).expect("mkdir work");

    let output = intake()
        .current_dir(tmp.path())
        .args([
            "overview",
            source.to_str().expect("utf8 path"),
            "--workspace",
            workspace.to_str().expect("utf8 path"),
            "--no-progress",
            "--json",
        ])
        .output()
        .expect("run overview");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert!(value["path"].as_str().expect("path").ends_with("sample"));
    assert_eq!(value["tree"]["src"]["files"], serde_json::json!(["main.rs"]));
    assert!(value["tree"].get(".git").is_none());
    assert_eq!(value["readme"]["status"], "found");
    assert_eq!(value["readme"]["content"], "# Sample\n\nA sample repository.");
}
