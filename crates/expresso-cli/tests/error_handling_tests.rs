//! Tests for error handling, exit codes and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn expresso() -> Command {
    Command::cargo_bin("expresso").unwrap()
}

#[test]
fn ts_with_view_engine_exits_2() {
    let temp = TempDir::new().unwrap();

    expresso()
        .current_dir(temp.path())
        .args(["new", "bad", "--lang", "ts", "--view", "pug"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("pug"));

    assert!(!temp.path().join("bad").exists());
}

#[test]
fn ts_with_mongojs_exits_2() {
    expresso()
        .args(["new", "bad", "--lang", "ts", "--database", "mongojs"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn invalid_app_name_exits_2() {
    expresso()
        .args(["new", ".hidden"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("name"));
}

#[test]
fn unknown_database_is_a_clap_error() {
    expresso()
        .args(["new", "x", "--database", "dynamodb"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn declined_overwrite_exits_3_and_leaves_destination() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("taken");
    fs::create_dir(&dest).unwrap();
    fs::write(dest.join("precious.txt"), "keep me").unwrap();

    // Piped stdin cannot answer the prompt, so the guard declines.
    expresso()
        .current_dir(temp.path())
        .args(["new", "taken", "--skip-install", "--no-git"])
        .assert()
        .failure()
        .code(3);

    assert_eq!(
        fs::read_to_string(dest.join("precious.txt")).unwrap(),
        "keep me"
    );
    assert!(!dest.join("package.json").exists());
}

#[test]
fn forced_overwrite_erases_and_succeeds() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("taken");
    fs::create_dir(&dest).unwrap();
    fs::write(dest.join("old.txt"), "stale").unwrap();

    expresso()
        .current_dir(temp.path())
        .args(["new", "taken", "--force", "--skip-install", "--no-git"])
        .assert()
        .success();

    assert!(!dest.join("old.txt").exists());
    assert!(dest.join("package.json").is_file());
}

#[test]
fn missing_explicit_config_exits_4() {
    expresso()
        .args(["--config", "/definitely/not/here.toml", "list"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn bad_config_default_exits_4() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("expresso.toml");
    fs::write(&cfg, "[defaults]\ndatabase = \"dynamodb\"\n").unwrap();

    expresso()
        .current_dir(temp.path())
        .args([
            "--config",
            cfg.to_str().unwrap(),
            "new",
            "x",
            "--skip-install",
            "--no-git",
        ])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("dynamodb"));
}

#[test]
fn errors_carry_suggestions() {
    expresso()
        .args(["new", "bad", "--lang", "ts", "--view", "pug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Suggestions:"));
}
