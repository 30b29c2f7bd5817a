//! End-to-end tests for the `expresso` binary.
//!
//! Generation tests always pass `--skip-install --no-git` so the suite
//! stays hermetic (no network, no global git state).

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn expresso() -> Command {
    Command::cargo_bin("expresso").unwrap()
}

#[test]
fn help_flag() {
    expresso()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("expresso"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn version_flag() {
    expresso()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_command_help_lists_selection_flags() {
    expresso()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--lang"))
        .stdout(predicate::str::contains("--database"))
        .stdout(predicate::str::contains("--view"))
        .stdout(predicate::str::contains("--css"))
        .stdout(predicate::str::contains("--cache"));
}

#[test]
fn new_minimal_js_project() {
    let temp = TempDir::new().unwrap();

    expresso()
        .current_dir(temp.path())
        .args(["new", "my-app", "--skip-install", "--no-git"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("package.json"));

    let root = temp.path().join("my-app");
    assert!(root.join("server/app.js").is_file());
    assert!(root.join("server/bin/www.js").is_file());
    assert!(root.join("package.json").is_file());
    assert!(root.join(".env").is_file());
    assert!(root.join(".gitignore").is_file());

    let pkg = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(pkg.contains("\"name\": \"my-app\""));
    assert!(pkg.contains("\"express\""));
}

#[test]
fn new_full_js_project_with_views() {
    let temp = TempDir::new().unwrap();

    expresso()
        .current_dir(temp.path())
        .args([
            "new",
            "my-blog",
            "--lang",
            "js",
            "--database",
            "mongoose",
            "--view",
            "pug",
            "--css",
            "less",
            "--cache",
            "redis",
            "--skip-install",
            "--no-git",
        ])
        .assert()
        .success();

    let root = temp.path().join("my-blog");
    assert!(root.join("server/views/index.pug").is_file());
    assert!(root.join("server/views/error.pug").is_file());
    assert!(root.join("server/models/item.js").is_file());
    assert!(root.join("public/stylesheets/style.less").is_file());

    let pkg = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(pkg.contains("\"mongoose\""));
    assert!(pkg.contains("\"pug\""));
    assert!(pkg.contains("\"less-middleware\""));
    assert!(pkg.contains("\"redis\""));

    let env = fs::read_to_string(root.join(".env")).unwrap();
    assert!(env.contains("MONGODB_URI="));
    assert!(env.contains("REDIS_URL="));
}

#[test]
fn new_ts_sequelize_project() {
    let temp = TempDir::new().unwrap();

    expresso()
        .current_dir(temp.path())
        .args([
            "new",
            "ts-api",
            "--lang",
            "ts",
            "--database",
            "sequelize",
            "--skip-install",
            "--no-git",
        ])
        .assert()
        .success();

    let root = temp.path().join("ts-api");
    assert!(root.join("server/app.ts").is_file());
    assert!(root.join("tsconfig.json").is_file());
    assert!(root.join("server/config/config.json").is_file());
    assert!(root.join("server/models/index.ts").is_file());

    let pkg = fs::read_to_string(root.join("package.json")).unwrap();
    assert!(pkg.contains("\"sequelize\""));
    assert!(pkg.contains("\"mysql2\""));
    assert!(pkg.contains("\"typescript\""));
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    expresso()
        .current_dir(temp.path())
        .args(["new", "preview", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("create"));

    assert!(!temp.path().join("preview").exists());
}

#[test]
fn dir_flag_overrides_destination() {
    let temp = TempDir::new().unwrap();
    let dest = temp.path().join("elsewhere");

    expresso()
        .args([
            "new",
            "my-app",
            "--dir",
            dest.to_str().unwrap(),
            "--skip-install",
            "--no-git",
        ])
        .assert()
        .success();

    assert!(dest.join("server/app.js").is_file());
    assert!(!temp.path().join("my-app").exists());
}

#[test]
fn no_gitignore_flag_skips_the_file() {
    let temp = TempDir::new().unwrap();

    expresso()
        .current_dir(temp.path())
        .args(["new", "bare", "--no-gitignore", "--skip-install", "--no-git"])
        .assert()
        .success();

    assert!(!temp.path().join("bare/.gitignore").exists());
}

#[test]
fn repeated_forced_runs_are_identical() {
    let temp = TempDir::new().unwrap();
    let args = [
        "new",
        "stable",
        "--database",
        "mongoose",
        "--force",
        "--skip-install",
        "--no-git",
    ];

    expresso()
        .current_dir(temp.path())
        .args(args)
        .assert()
        .success();
    let first = fs::read_to_string(temp.path().join("stable/server/app.js")).unwrap();

    expresso()
        .current_dir(temp.path())
        .args(args)
        .assert()
        .success();
    let second = fs::read_to_string(temp.path().join("stable/server/app.js")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn quiet_flag_silences_stdout() {
    let temp = TempDir::new().unwrap();

    expresso()
        .current_dir(temp.path())
        .args(["-q", "new", "silent", "--skip-install", "--no-git"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn list_command_shows_the_matrix() {
    expresso()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("js"))
        .stdout(predicate::str::contains("--database"))
        .stdout(predicate::str::contains("mongoose"));
}

#[test]
fn list_can_filter_by_variant() {
    expresso()
        .args(["list", "--lang", "ts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ts"))
        .stdout(predicate::str::contains("API-only"));
}

#[test]
fn shell_completions() {
    expresso()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}
