//! Integration tests for the command-line surface.
//!
//! These run the built binary; network-touching paths are not exercised
//! here, only parsing, configuration, and the render-nothing outcome.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the developer's real environment and config.
fn repolens(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("repolens").unwrap();
    cmd.env_remove("GITHUB_TOKEN")
        .env_remove("REPOLENS_CONFIG")
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"));
    cmd
}

#[test]
fn help_lists_the_cards() {
    let home = TempDir::new().unwrap();
    repolens(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("releases"))
        .stdout(predicate::str::contains("contributors"))
        .stdout(predicate::str::contains("languages"))
        .stdout(predicate::str::contains("compliance"));
}

#[test]
fn unknown_subcommand_is_rejected() {
    let home = TempDir::new().unwrap();
    repolens(&home)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("frobnicate"));
}

#[test]
fn missing_token_is_reported_with_the_variable_name() {
    let home = TempDir::new().unwrap();
    repolens(&home)
        .args(["releases", "--repo", "acme/widgets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_TOKEN"));
}

#[test]
fn custom_token_variable_is_honored_in_the_error() {
    let home = TempDir::new().unwrap();
    repolens(&home)
        .args([
            "releases",
            "--repo",
            "acme/widgets",
            "--token-env",
            "MY_TOKEN",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("MY_TOKEN"));
}

#[test]
fn entity_without_repo_renders_nothing_and_exits_cleanly() {
    let home = TempDir::new().unwrap();
    repolens(&home)
        .env("GITHUB_TOKEN", "test-token")
        .arg("releases")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn malformed_repo_slug_renders_nothing_and_exits_cleanly() {
    let home = TempDir::new().unwrap();
    repolens(&home)
        .env("GITHUB_TOKEN", "test-token")
        .args(["releases", "--repo", "no-slash-here"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn invalid_config_file_is_an_error() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(&config, "not [valid toml").unwrap();

    repolens(&home)
        .env("GITHUB_TOKEN", "test-token")
        .args(["releases", "--repo", "acme/widgets"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}

#[test]
fn config_with_unknown_field_is_rejected() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("config.toml");
    std::fs::write(
        &config,
        r#"
        [[instances]]
        host = "ghe.internal"
        api_url = "https://ghe.internal/api/v3"
        "#,
    )
    .unwrap();

    repolens(&home)
        .env("GITHUB_TOKEN", "test-token")
        .args(["releases", "--repo", "acme/widgets"])
        .arg("--config")
        .arg(&config)
        .assert()
        .failure();
}
