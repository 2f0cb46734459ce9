//! External CLI operations for fnship.
//!
//! Everything here shells out to the `docker` or `aws` CLI through a
//! [`CommandExecutor`], so every remote operation can be mocked in tests.

pub mod aws;
pub mod command;
pub mod docker;
pub mod executor;

pub use aws::{AwsClient, FunctionError, RegistryError, RepositoryInfo};
pub use command::CommandError;
pub use docker::{DockerClient, DockerError};
pub use executor::{CommandExecutor, RealExecutor};
