use std::io::Write;
use std::path::PathBuf;

use fnship_cloud::{AwsClient, DockerClient};
use fnship_core::{FnshipConfig, Selection};

use super::pipeline::{self, EnvStatus};

/// Execute the full deploy workflow for the selected environments.
pub async fn deploy(selection: Option<Selection>) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let config = FnshipConfig::load(&project_dir)?;

    let selection = match selection {
        Some(s) => s,
        None => prompt_selection()?,
    };
    tracing::debug!(dev = selection.dev, prod = selection.prod, "environment selection resolved");

    let docker = DockerClient::new();
    let aws = AwsClient::new();
    let summary = pipeline::run(&docker, &aws, &config, selection).await?;

    println!();
    println!("Deploy summary:");
    for outcome in &summary.outcomes {
        match &outcome.status {
            EnvStatus::Updated { function } => {
                println!("  {env}: updated {function}", env = outcome.env);
            }
            EnvStatus::Skipped { token } => {
                println!(
                    "  {env}: skipped — no function matching '{token}'",
                    env = outcome.env
                );
            }
        }
    }

    Ok(())
}

/// One interactive prompt; anything outside 1/2/3 is fatal.
fn prompt_selection() -> anyhow::Result<Selection> {
    println!("Select deployment target:");
    println!("  1) dev");
    println!("  2) prod");
    println!("  3) both");
    print!("> ");
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    Ok(Selection::from_choice(&input)?)
}
