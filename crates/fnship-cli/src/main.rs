mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use fnship_core::Selection;

#[derive(Parser)]
#[command(name = "fnship", about = "Build, push, and roll out container-image Lambda functions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the image and deploy it to the selected environments
    Deploy {
        /// Target environments; prompts interactively when omitted
        #[arg(long, value_enum)]
        env: Option<EnvChoice>,
    },
    /// Check local tooling and AWS profile readiness
    Doctor,
}

#[derive(Clone, Copy, ValueEnum)]
enum EnvChoice {
    Dev,
    Prod,
    Both,
}

impl From<EnvChoice> for Selection {
    fn from(choice: EnvChoice) -> Self {
        match choice {
            EnvChoice::Dev => Selection {
                dev: true,
                prod: false,
            },
            EnvChoice::Prod => Selection {
                dev: false,
                prod: true,
            },
            EnvChoice::Both => Selection {
                dev: true,
                prod: true,
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Deploy { env } => commands::deploy(env.map(Selection::from)).await?,
        Commands::Doctor => commands::doctor().await?,
    }

    Ok(())
}
