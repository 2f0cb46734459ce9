use std::path::Path;

use fnship_cloud::{AwsClient, DockerClient};
use fnship_core::{EnvName, FnshipConfig};

struct CheckResult {
    passed: bool,
    detail: String,
}

impl CheckResult {
    fn ok(detail: impl Into<String>) -> Self {
        Self {
            passed: true,
            detail: detail.into(),
        }
    }

    fn fail(detail: impl Into<String>) -> Self {
        Self {
            passed: false,
            detail: detail.into(),
        }
    }

    fn icon(&self) -> &'static str {
        if self.passed { "OK" } else { "NG" }
    }
}

/// Run all readiness checks without early return and report pass/fail per item.
pub async fn doctor() -> anyhow::Result<()> {
    let docker = DockerClient::new();
    let aws = AwsClient::new();

    let mut checks: Vec<(String, CheckResult)> = Vec::new();

    match docker.version().await {
        Ok(v) => checks.push(("docker CLI".to_owned(), CheckResult::ok(v))),
        Err(e) => checks.push(("docker CLI".to_owned(), CheckResult::fail(e.to_string()))),
    }

    match aws.version().await {
        Ok(v) => checks.push(("aws CLI".to_owned(), CheckResult::ok(v))),
        Err(e) => checks.push(("aws CLI".to_owned(), CheckResult::fail(e.to_string()))),
    }

    let config = FnshipConfig::load(Path::new("."));
    match &config {
        Ok(_) => checks.push(("fnship.toml".to_owned(), CheckResult::ok("Found"))),
        Err(e) => checks.push(("fnship.toml".to_owned(), CheckResult::fail(e.to_string()))),
    }

    // Each profile must resolve, and to the account the config claims.
    if let Ok(config) = &config {
        for env in [EnvName::Dev, EnvName::Prod] {
            let target = config.target(env);
            let label = format!("{env} profile '{profile}'", profile = target.profile);
            let result = match aws.caller_identity(&target.profile, &target.region).await {
                Ok(account) if account == target.account_id => {
                    CheckResult::ok(format!("account {account}"))
                }
                Ok(account) => CheckResult::fail(format!(
                    "resolves to account {account}, expected {expected}",
                    expected = target.account_id
                )),
                Err(e) => CheckResult::fail(e.to_string()),
            };
            checks.push((label, result));
        }
    }

    println!();
    for (name, result) in &checks {
        println!("  [{icon}] {name}: {detail}", icon = result.icon(), detail = result.detail);
    }

    if checks.iter().any(|(_, r)| !r.passed) {
        anyhow::bail!("some checks failed — see above for details");
    }

    Ok(())
}
