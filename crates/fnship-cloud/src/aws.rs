use crate::command::CommandError;
use crate::executor::{CommandExecutor, RealExecutor};
use fnship_core::DeployTarget;
use serde::Deserialize;

const AWS: &str = "aws";

/// Marker the AWS CLI prints when an ECR repository does not exist.
const REPO_NOT_FOUND: &str = "RepositoryNotFoundException";

/// AWS CLI client for ECR and Lambda, parameterized over the executor.
///
/// Every call is scoped to a [`DeployTarget`]'s credential profile and
/// region; nothing relies on ambient AWS configuration.
pub struct AwsClient<E: CommandExecutor = RealExecutor> {
    executor: E,
}

impl AwsClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for AwsClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> AwsClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    // ── ECR ──

    /// Look up the repository by name. `Ok(None)` means it does not exist;
    /// any other failure is a real error.
    pub async fn describe_repository(
        &self,
        target: &DeployTarget,
        repo_name: &str,
    ) -> Result<Option<RepositoryInfo>, RegistryError> {
        let result = self
            .executor
            .exec(
                AWS,
                &scoped(
                    ["ecr", "describe-repositories", "--repository-names", repo_name],
                    target,
                ),
            )
            .await;

        let output = match result {
            Ok(output) => output,
            Err(e) if e.stderr_contains(REPO_NOT_FOUND) => return Ok(None),
            Err(e) => return Err(RegistryError::Describe { source: e }),
        };

        let parsed: DescribeRepositories =
            serde_json::from_str(&output).map_err(|e| RegistryError::Parse {
                what: "describe-repositories",
                source: e,
            })?;

        Ok(parsed.repositories.into_iter().next().map(|r| RepositoryInfo {
            uri: r.repository_uri,
            created_at: display_timestamp(r.created_at),
        }))
    }

    /// Create the repository with scan-on-push enabled and mutable tags.
    pub async fn create_repository(
        &self,
        target: &DeployTarget,
        repo_name: &str,
    ) -> Result<(), RegistryError> {
        self.executor
            .exec(
                AWS,
                &scoped(
                    [
                        "ecr",
                        "create-repository",
                        "--repository-name",
                        repo_name,
                        "--image-scanning-configuration",
                        "scanOnPush=true",
                        "--image-tag-mutability",
                        "MUTABLE",
                    ],
                    target,
                ),
            )
            .await
            .map_err(|e| RegistryError::Create { source: e })?;

        Ok(())
    }

    /// Obtain a short-lived registry password for `docker login`.
    pub async fn get_login_password(
        &self,
        target: &DeployTarget,
    ) -> Result<String, RegistryError> {
        let output = self
            .executor
            .exec(AWS, &scoped(["ecr", "get-login-password"], target))
            .await
            .map_err(|e| RegistryError::LoginPassword { source: e })?;

        Ok(output.trim().to_owned())
    }

    // ── Lambda ──

    /// Names of all deployed functions in the target account/region.
    pub async fn list_functions(
        &self,
        target: &DeployTarget,
    ) -> Result<Vec<String>, FunctionError> {
        let output = self
            .executor
            .exec(
                AWS,
                &scoped(
                    [
                        "lambda",
                        "list-functions",
                        "--query",
                        "Functions[].FunctionName",
                        "--output",
                        "json",
                    ],
                    target,
                ),
            )
            .await
            .map_err(|e| FunctionError::List { source: e })?;

        serde_json::from_str(&output).map_err(|e| FunctionError::Parse {
            what: "list-functions",
            source: e,
        })
    }

    /// Point the function's code at a pushed image.
    pub async fn update_function_code(
        &self,
        target: &DeployTarget,
        function_name: &str,
        image_uri: &str,
    ) -> Result<(), FunctionError> {
        self.executor
            .exec(
                AWS,
                &scoped(
                    [
                        "lambda",
                        "update-function-code",
                        "--function-name",
                        function_name,
                        "--image-uri",
                        image_uri,
                    ],
                    target,
                ),
            )
            .await
            .map_err(|e| FunctionError::Update { source: e })?;

        Ok(())
    }

    /// Block until the platform reports the update finished. Polling and
    /// timeout semantics are the AWS CLI waiter's own.
    pub async fn wait_function_updated(
        &self,
        target: &DeployTarget,
        function_name: &str,
    ) -> Result<(), FunctionError> {
        self.executor
            .exec(
                AWS,
                &scoped(
                    ["lambda", "wait", "function-updated", "--function-name", function_name],
                    target,
                ),
            )
            .await
            .map_err(|e| FunctionError::Wait { source: e })?;

        Ok(())
    }

    // ── STS ──

    /// Account ID the profile resolves to, for diagnostics.
    pub async fn caller_identity(
        &self,
        profile: &str,
        region: &str,
    ) -> Result<String, CommandError> {
        let mut cmd = args([
            "sts",
            "get-caller-identity",
            "--query",
            "Account",
            "--output",
            "text",
        ]);
        cmd.extend(scope_flags(profile, region));

        let output = self.executor.exec(AWS, &cmd).await?;
        Ok(output.trim().to_owned())
    }

    /// AWS CLI version string, for diagnostics.
    pub async fn version(&self) -> Result<String, CommandError> {
        let output = self.executor.exec(AWS, &args(["--version"])).await?;
        Ok(output.trim().to_owned())
    }
}

// ── Helpers ──

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

fn scope_flags(profile: &str, region: &str) -> Vec<String> {
    vec![
        "--profile".to_owned(),
        profile.to_owned(),
        "--region".to_owned(),
        region.to_owned(),
        "--no-cli-pager".to_owned(),
    ]
}

/// Base args plus the target's profile/region scope.
fn scoped<const N: usize>(a: [&str; N], target: &DeployTarget) -> Vec<String> {
    let mut v = args(a);
    v.extend(scope_flags(&target.profile, &target.region));
    v
}

/// createdAt is an ISO-8601 string with `--output json` on CLI v2, but a
/// numeric epoch on older versions.
fn display_timestamp(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    }
}

// ── Wire types ──

#[derive(Debug, Clone)]
pub struct RepositoryInfo {
    pub uri: String,
    pub created_at: String,
}

#[derive(Deserialize)]
struct DescribeRepositories {
    repositories: Vec<RepositoryRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryRecord {
    repository_uri: String,
    created_at: serde_json::Value,
}

// ── Error types ──

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("failed to query ECR repository")]
    Describe { source: CommandError },

    #[error("failed to create ECR repository")]
    Create { source: CommandError },

    #[error("failed to obtain ECR login password")]
    LoginPassword { source: CommandError },

    #[error("failed to parse {what} output")]
    Parse {
        what: &'static str,
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum FunctionError {
    #[error("failed to list Lambda functions")]
    List { source: CommandError },

    #[error("failed to parse {what} output")]
    Parse {
        what: &'static str,
        source: serde_json::Error,
    },

    #[error("function code update failed")]
    Update { source: CommandError },

    #[error("waiting for function update failed")]
    Wait { source: CommandError },
}
