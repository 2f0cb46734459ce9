use fnship_core::{EnvName, Error, FnshipConfig, Selection};

fn config() -> FnshipConfig {
    toml::from_str(
        r#"
[project]
app_name = "orders-sync"
function_token = "orders"
region = "eu-south-1"

[dev]
account_id = "111111111111"
profile = "acme-dev"

[prod]
account_id = "222222222222"
profile = "acme-prod"
"#,
    )
    .unwrap()
}

// ── Selection ──

#[test]
fn choice_1_selects_dev_only() {
    let s = Selection::from_choice("1").unwrap();
    assert_eq!(s.envs(), vec![EnvName::Dev]);
}

#[test]
fn choice_2_selects_prod_only() {
    let s = Selection::from_choice("2").unwrap();
    assert_eq!(s.envs(), vec![EnvName::Prod]);
}

#[test]
fn choice_3_selects_dev_before_prod() {
    let s = Selection::from_choice("3").unwrap();
    assert_eq!(s.envs(), vec![EnvName::Dev, EnvName::Prod]);
}

#[test]
fn choice_is_trimmed() {
    assert!(Selection::from_choice(" 2\n").is_ok());
}

#[test]
fn invalid_choices_are_fatal() {
    for input in ["", "0", "4", "dev", "yes", "12"] {
        let err = Selection::from_choice(input).unwrap_err();
        assert!(matches!(err, Error::InvalidChoice { .. }), "input: {input:?}");
    }
}

// ── DeployTarget ──

#[test]
fn dev_target_derives_registry_and_remote_tag() {
    let target = config().target(EnvName::Dev);

    assert_eq!(target.account_id, "111111111111");
    assert_eq!(target.profile, "acme-dev");
    assert_eq!(target.registry, "111111111111.dkr.ecr.eu-south-1.amazonaws.com");
    assert_eq!(
        target.remote_tag,
        "111111111111.dkr.ecr.eu-south-1.amazonaws.com/orders-sync:latest"
    );
}

#[test]
fn prod_target_uses_prod_account_and_profile() {
    let target = config().target(EnvName::Prod);

    assert_eq!(target.profile, "acme-prod");
    assert_eq!(
        target.remote_tag,
        "222222222222.dkr.ecr.eu-south-1.amazonaws.com/orders-sync:latest"
    );
}

#[test]
fn target_resolution_is_stable_across_calls() {
    let config = config();
    let first = config.target(EnvName::Dev);
    let second = config.target(EnvName::Dev);

    assert_eq!(first.remote_tag, second.remote_tag);
    assert_eq!(first.registry, second.registry);
}
