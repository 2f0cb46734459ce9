use crate::command::CommandError;
use crate::executor::{CommandExecutor, RealExecutor};

const DOCKER: &str = "docker";

/// Docker CLI client, parameterized over the executor for testability.
pub struct DockerClient<E: CommandExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    /// Build the image once for a fixed target platform, with build
    /// provenance attestation disabled. Output streams to the terminal.
    pub async fn build_image(
        &self,
        context: &str,
        tag: &str,
        platform: &str,
    ) -> Result<(), DockerError> {
        self.executor
            .exec_streaming(
                DOCKER,
                &args([
                    "build",
                    "--platform",
                    platform,
                    "--provenance=false",
                    "-t",
                    tag,
                    context,
                ]),
            )
            .await
            .map_err(|e| DockerError::Build { source: e })
    }

    /// Authenticate against a registry with a password piped to stdin.
    pub async fn login(&self, registry: &str, password: &str) -> Result<(), DockerError> {
        self.executor
            .exec_with_stdin(
                DOCKER,
                &args(["login", "--username", "AWS", "--password-stdin", registry]),
                password.as_bytes(),
            )
            .await
            .map_err(|e| DockerError::Login { source: e })?;

        Ok(())
    }

    pub async fn tag_image(&self, source: &str, target: &str) -> Result<(), DockerError> {
        self.executor
            .exec(DOCKER, &args(["tag", source, target]))
            .await
            .map_err(|e| DockerError::Tag { source: e })?;

        Ok(())
    }

    pub async fn push_image(&self, tag: &str) -> Result<(), DockerError> {
        self.executor
            .exec_streaming(DOCKER, &args(["push", tag]))
            .await
            .map_err(|e| DockerError::Push { source: e })
    }

    /// Remove a local image tag. The image may still be referenced by a
    /// running container, so callers treat failure as a warning.
    pub async fn remove_image(&self, tag: &str) -> Result<(), DockerError> {
        self.executor
            .exec(DOCKER, &args(["rmi", tag]))
            .await
            .map_err(|e| DockerError::RemoveImage { source: e })?;

        Ok(())
    }

    pub async fn prune_dangling(&self) -> Result<(), DockerError> {
        self.executor
            .exec(DOCKER, &args(["image", "prune", "-f"]))
            .await
            .map_err(|e| DockerError::Prune { source: e })?;

        Ok(())
    }

    /// Docker client version string, for diagnostics.
    pub async fn version(&self) -> Result<String, CommandError> {
        let output = self
            .executor
            .exec(DOCKER, &args(["version", "--format", "{{.Client.Version}}"]))
            .await?;

        Ok(output.trim().to_owned())
    }
}

fn args<const N: usize>(a: [&str; N]) -> Vec<String> {
    a.iter().map(|s| (*s).to_owned()).collect()
}

#[derive(Debug, thiserror::Error)]
pub enum DockerError {
    #[error("image build failed")]
    Build { source: CommandError },

    #[error("registry login failed")]
    Login { source: CommandError },

    #[error("failed to tag image")]
    Tag { source: CommandError },

    #[error("image push failed")]
    Push { source: CommandError },

    #[error("failed to remove image")]
    RemoveImage { source: CommandError },

    #[error("failed to prune dangling images")]
    Prune { source: CommandError },
}
