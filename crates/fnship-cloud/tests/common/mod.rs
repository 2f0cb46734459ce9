use fnship_cloud::command::CommandError;
use fnship_cloud::executor::CommandExecutor;
use fnship_core::{DeployTarget, EnvName};
use mockall::mock;

mock! {
    pub Executor {}

    impl CommandExecutor for Executor {
        async fn exec(&self, program: &str, args: &[String]) -> Result<String, CommandError>;
        async fn exec_streaming(&self, program: &str, args: &[String]) -> Result<(), CommandError>;
        async fn exec_with_stdin(
            &self,
            program: &str,
            args: &[String],
            stdin_data: &[u8],
        ) -> Result<String, CommandError>;
    }
}

#[allow(dead_code)]
pub fn dev_target() -> DeployTarget {
    DeployTarget {
        env: EnvName::Dev,
        account_id: "111111111111".to_owned(),
        profile: "acme-dev".to_owned(),
        region: "eu-south-1".to_owned(),
        registry: "111111111111.dkr.ecr.eu-south-1.amazonaws.com".to_owned(),
        remote_tag: "111111111111.dkr.ecr.eu-south-1.amazonaws.com/orders-sync:latest".to_owned(),
    }
}

#[allow(dead_code)]
pub fn command_failed(stderr: &str) -> CommandError {
    CommandError::CommandFailed {
        program: "aws".to_owned(),
        args: vec![],
        stderr: stderr.to_owned(),
    }
}
