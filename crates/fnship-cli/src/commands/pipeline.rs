use fnship_cloud::aws::{AwsClient, FunctionError, RegistryError};
use fnship_cloud::docker::{DockerClient, DockerError};
use fnship_cloud::executor::CommandExecutor;
use fnship_core::{DeployTarget, EnvName, FnshipConfig, Selection};

use super::TARGET_PLATFORM;

/// Result of one environment's deploy procedure.
#[derive(Debug)]
pub(crate) struct EnvOutcome {
    pub env: EnvName,
    pub status: EnvStatus,
}

#[derive(Debug)]
pub(crate) enum EnvStatus {
    Updated { function: String },
    /// No function matched the token; the environment was left untouched.
    Skipped { token: String },
}

#[derive(Debug)]
pub(crate) struct RunSummary {
    pub outcomes: Vec<EnvOutcome>,
}

/// Fatal failures. Any of these aborts the whole run, skipping remaining
/// environments and cleanup. A zero-match environment is NOT here: it only
/// skips that environment (see [`EnvStatus::Skipped`]).
#[derive(Debug, thiserror::Error)]
pub(crate) enum PipelineError {
    #[error("image build failed")]
    Build { source: DockerError },

    #[error("could not query the {env} container registry")]
    RepoDescribe { env: EnvName, source: RegistryError },

    #[error("could not create the {env} container repository — nothing downstream can succeed")]
    RepoCreate { env: EnvName, source: RegistryError },

    #[error("could not obtain a registry password for {env}")]
    LoginPassword { env: EnvName, source: RegistryError },

    #[error("registry login failed for {env}")]
    Login { env: EnvName, source: DockerError },

    #[error("could not push the image for {env}")]
    Push { env: EnvName, source: DockerError },

    #[error("could not list {env} functions")]
    FunctionList { env: EnvName, source: FunctionError },

    #[error(
        "multiple functions match '{token}' in {env}: {} — narrow the function_token",
        .names.join(", ")
    )]
    AmbiguousMatch {
        env: EnvName,
        token: String,
        names: Vec<String>,
    },

    #[error("function code update failed in {env}")]
    UpdateFailed { env: EnvName, source: FunctionError },

    #[error("waiting for the {env} function update failed")]
    WaitFailed { env: EnvName, source: FunctionError },
}

/// Run the full workflow: build once, deploy each selected environment in
/// order (dev before prod), then clean up local tags.
pub(crate) async fn run<D, A>(
    docker: &DockerClient<D>,
    aws: &AwsClient<A>,
    config: &FnshipConfig,
    selection: Selection,
) -> Result<RunSummary, PipelineError>
where
    D: CommandExecutor,
    A: CommandExecutor,
{
    let local_tag = config.local_tag();

    println!("Building {local_tag} for {TARGET_PLATFORM}...");
    docker
        .build_image(".", &local_tag, TARGET_PLATFORM)
        .await
        .map_err(|e| PipelineError::Build { source: e })?;

    let mut outcomes = Vec::new();
    let mut pushed_tags = Vec::new();

    // Environments deploy strictly sequentially: each one logs in to a
    // different registry under a different profile through the one shared
    // local docker session.
    for env in selection.envs() {
        let target = config.target(env);
        let outcome =
            deploy_environment(docker, aws, config, &target, &local_tag, &mut pushed_tags).await?;
        outcomes.push(outcome);
    }

    // Reached only when no environment hit a fatal error; any `?` above
    // skips cleanup entirely, matching the exit-on-fatal runbook.
    cleanup(docker, &local_tag, &pushed_tags).await;

    Ok(RunSummary { outcomes })
}

async fn deploy_environment<D, A>(
    docker: &DockerClient<D>,
    aws: &AwsClient<A>,
    config: &FnshipConfig,
    target: &DeployTarget,
    local_tag: &str,
    pushed_tags: &mut Vec<String>,
) -> Result<EnvOutcome, PipelineError>
where
    D: CommandExecutor,
    A: CommandExecutor,
{
    let env = target.env;
    println!();
    println!("── {env} (account {account}) ──", account = target.account_id);

    // Repository: show it if present, create it if not.
    let repo_name = config.repository();
    let existing = aws
        .describe_repository(target, repo_name)
        .await
        .map_err(|e| PipelineError::RepoDescribe { env, source: e })?;

    match existing {
        Some(info) => {
            println!("Repository {repo_name}: {uri} (created {at})", uri = info.uri, at = info.created_at);
        }
        None => {
            println!("Repository {repo_name} not found — creating...");
            aws.create_repository(target, repo_name)
                .await
                .map_err(|e| PipelineError::RepoCreate { env, source: e })?;
        }
    }

    // Registry login with a short-lived password.
    println!("Logging in to {}...", target.registry);
    let password = aws
        .get_login_password(target)
        .await
        .map_err(|e| PipelineError::LoginPassword { env, source: e })?;
    docker
        .login(&target.registry, &password)
        .await
        .map_err(|e| PipelineError::Login { env, source: e })?;

    // Tag and push the one shared local image.
    docker
        .tag_image(local_tag, &target.remote_tag)
        .await
        .map_err(|e| PipelineError::Push { env, source: e })?;
    println!("Pushing {}...", target.remote_tag);
    docker
        .push_image(&target.remote_tag)
        .await
        .map_err(|e| PipelineError::Push { env, source: e })?;
    pushed_tags.push(target.remote_tag.clone());

    // Discover the function by name substring; exactly one match required.
    let token = config.function_token();
    let functions = aws
        .list_functions(target)
        .await
        .map_err(|e| PipelineError::FunctionList { env, source: e })?;
    let matches: Vec<String> = functions
        .into_iter()
        .filter(|name| name.contains(token))
        .collect();

    let function = match matches.as_slice() {
        [] => {
            eprintln!(
                "Error: no function matching '{token}' in {env} — create it through the \
                 deployment pipeline first, then re-run fnship"
            );
            return Ok(EnvOutcome {
                env,
                status: EnvStatus::Skipped {
                    token: token.to_owned(),
                },
            });
        }
        [one] => one.clone(),
        many => {
            return Err(PipelineError::AmbiguousMatch {
                env,
                token: token.to_owned(),
                names: many.to_vec(),
            });
        }
    };

    // Point the function at the pushed image and wait for the rollout.
    println!("Updating {function} to {}...", target.remote_tag);
    aws.update_function_code(target, &function, &target.remote_tag)
        .await
        .map_err(|e| PipelineError::UpdateFailed { env, source: e })?;

    println!("Waiting for the update to complete...");
    aws.wait_function_updated(target, &function)
        .await
        .map_err(|e| PipelineError::WaitFailed { env, source: e })?;

    println!("{env}: {function} now runs {}", target.remote_tag);
    Ok(EnvOutcome {
        env,
        status: EnvStatus::Updated { function },
    })
}

/// Best-effort removal of every tag created this run. Failures are warnings
/// only and never change the exit status.
async fn cleanup<D: CommandExecutor>(
    docker: &DockerClient<D>,
    local_tag: &str,
    pushed_tags: &[String],
) {
    println!();
    println!("Cleaning up local tags...");

    for tag in std::iter::once(local_tag).chain(pushed_tags.iter().map(String::as_str)) {
        if let Err(e) = docker.remove_image(tag).await {
            println!("Warning: could not remove {tag} ({e})");
        }
    }

    if let Err(e) = docker.prune_dangling().await {
        println!("Warning: image prune failed ({e})");
    }
}
