use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn fnship() -> assert_cmd::Command {
    cargo_bin_cmd!("fnship")
}

const CONFIG: &str = r#"
[project]
app_name = "orders-sync"
function_token = "orders"

[dev]
account_id = "111111111111"
profile = "acme-dev"

[prod]
account_id = "222222222222"
profile = "acme-prod"
"#;

// ── Help / Version ──

#[test]
fn shows_help() {
    fnship()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("container-image Lambda"));
}

#[test]
fn shows_version() {
    fnship()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fnship"));
}

// ── Deploy: config validation ──

#[test]
fn deploy_fails_without_config_file() {
    let tmp = TempDir::new().unwrap();

    fnship()
        .current_dir(tmp.path())
        .args(["deploy", "--env", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fnship.toml not found"));
}

#[test]
fn deploy_fails_on_malformed_config() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("fnship.toml"), "not valid {{{{ toml").unwrap();

    fnship()
        .current_dir(tmp.path())
        .args(["deploy", "--env", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse"));
}

// ── Deploy: environment selection ──

#[test]
fn invalid_menu_choice_is_fatal_before_any_work() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("fnship.toml"), CONFIG).unwrap();

    fnship()
        .current_dir(tmp.path())
        .arg("deploy")
        .write_stdin("9\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid environment choice"));
}

#[test]
fn empty_menu_input_is_fatal() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("fnship.toml"), CONFIG).unwrap();

    fnship()
        .current_dir(tmp.path())
        .arg("deploy")
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid environment choice"));
}

#[test]
fn env_flag_rejects_unknown_values() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("fnship.toml"), CONFIG).unwrap();

    fnship()
        .current_dir(tmp.path())
        .args(["deploy", "--env", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
