use fnship_core::FnshipConfig;
use tempfile::TempDir;

const FULL: &str = r#"
[project]
app_name = "orders-sync"
function_token = "orders"
region = "eu-west-1"
repository = "orders-images"

[dev]
account_id = "111111111111"
profile = "acme-dev"

[prod]
account_id = "222222222222"
profile = "acme-prod"
"#;

const MINIMAL: &str = r#"
[project]
app_name = "orders-sync"

[dev]
account_id = "111111111111"
profile = "acme-dev"

[prod]
account_id = "222222222222"
profile = "acme-prod"
"#;

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("fnship.toml"), FULL).unwrap();

    let config = FnshipConfig::load(tmp.path()).unwrap();

    assert_eq!(config.project.app_name, "orders-sync");
    assert_eq!(config.project.region, "eu-west-1");
    assert_eq!(config.function_token(), "orders");
    assert_eq!(config.repository(), "orders-images");
    assert_eq!(config.dev.account_id, "111111111111");
    assert_eq!(config.dev.profile, "acme-dev");
    assert_eq!(config.prod.account_id, "222222222222");
    assert_eq!(config.prod.profile, "acme-prod");
}

#[test]
fn load_minimal_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("fnship.toml"), MINIMAL).unwrap();

    let config = FnshipConfig::load(tmp.path()).unwrap();

    // token and repository fall back to the app name
    assert_eq!(config.function_token(), "orders-sync");
    assert_eq!(config.repository(), "orders-sync");
    assert_eq!(config.project.region, "eu-south-1");
    assert_eq!(config.local_tag(), "orders-sync:latest");
}

#[test]
fn load_missing_file_is_an_error() {
    let tmp = TempDir::new().unwrap();

    let err = FnshipConfig::load(tmp.path()).unwrap_err().to_string();
    assert!(err.contains("fnship.toml not found"));
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("fnship.toml"), "not valid {{{{ toml").unwrap();

    let err = FnshipConfig::load(tmp.path()).unwrap_err().to_string();
    assert!(err.contains("parse"));
}

#[test]
fn load_missing_environment_section_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[project]
app_name = "orders-sync"

[dev]
account_id = "111111111111"
profile = "acme-dev"
"#;
    std::fs::write(tmp.path().join("fnship.toml"), toml).unwrap();

    assert!(FnshipConfig::load(tmp.path()).is_err());
}
