mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod services;
mod workflow;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::commit::{self as commit_cmd, CommitArgs};
use crate::cmd::config::{self as config_cmd, ConfigArgs};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::llm::OpenRouterClient;
use crate::workflow::commit::CommitOutcome;

#[derive(Parser)]
#[command(
    name = "commitgen",
    author,
    version,
    about = "Generate a commit message from local changes, then commit and push",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    commit: CommitArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect CLI configuration.
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .without_time()
        .with_target(false)
        .init();

    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    match cli.command {
        Some(Commands::Config(args)) => config_cmd::run(&config, args.command),
        None => run_commit(config, cli.commit).await,
    }
}

async fn run_commit(config: AppConfig, args: CommitArgs) -> AppResult<()> {
    let git = Arc::new(GitCli::new(config.workspace_root.clone()));
    let language_model = Arc::new(OpenRouterClient::new(
        config.api_url.clone(),
        config.model.clone(),
    ));

    let context = AppContext::new(config, git, language_model);

    match commit_cmd::run(&context, args).await? {
        CommitOutcome::NoChanges => println!("Nothing to commit."),
        CommitOutcome::Committed(message) => println!("Committed and pushed: {}", message.title),
    }

    Ok(())
}
