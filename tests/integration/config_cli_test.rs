//! `littime config` and `littime completions`

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn littime(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("littime").unwrap();
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn show_prints_defaults_as_toml() {
    let temp = TempDir::new().unwrap();

    littime(&temp)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[estimator]"))
        .stdout(predicate::str::contains("default_reading_speed = 180"))
        .stdout(predicate::str::contains("file = \"littime_results.json\""));
}

#[test]
fn show_uses_explicit_config() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("alt.toml");
    fs::write(&path, "[estimator]\ndefault_workers = 9\n").unwrap();

    littime(&temp)
        .args(["config", "show", "--config", "alt.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_workers = 9"));
}

#[test]
fn invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("littime.toml"), "[estimator]\ndefault_reading_speed = 0\n").unwrap();

    littime(&temp)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("default_reading_speed"));
}

#[test]
fn init_writes_user_config_once() {
    let temp = TempDir::new().unwrap();
    let path = temp
        .path()
        .join(".config")
        .join("littime")
        .join("config.toml");

    littime(&temp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(path.exists());

    fs::write(&path, "[estimator]\ndefault_workers = 3\n").unwrap();
    littime(&temp)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert!(fs::read_to_string(&path).unwrap().contains("default_workers = 3"));
}

#[test]
fn path_prefers_local_file() {
    let temp = TempDir::new().unwrap();

    littime(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No config file found"));

    fs::write(temp.path().join("littime.toml"), "").unwrap();
    littime(&temp)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("littime.toml"));
}

#[test]
fn completions_mention_subcommands() {
    let temp = TempDir::new().unwrap();

    littime(&temp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("littime"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn help_lists_commands() {
    let temp = TempDir::new().unwrap();

    littime(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn init_honors_explicit_config_path() {
    let temp = TempDir::new().unwrap();

    littime(&temp)
        .args(["config", "init", "--config", "conf/littime.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("conf/littime.toml"));

    let written = fs::read_to_string(temp.path().join("conf").join("littime.toml")).unwrap();
    assert!(written.contains("default_reading_speed = 180"));
    assert!(!temp.path().join(".config").exists());
}
