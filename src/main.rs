mod cmd;
mod config;
mod context;
mod domain;
mod error;
mod infra;
mod logging;
mod services;
mod workflow;

use std::sync::Arc;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

use crate::cmd::report;
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::git::GitCli;
use crate::infra::process::ProcessRunner;

const GIT_PROGRAM: &str = "git";

/// Fetches origin/master and reports how the local index differs from it.
#[derive(Parser, Debug)]
#[command(
    name = "jinx",
    author,
    version,
    about = "Show what's around the corner in git"
)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::setup_logger(cli.verbosity.tracing_level_filter());

    if let Err(error) = run().await {
        tracing::debug!(?error, "report failed");
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn run() -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd)?;

    let runner = Arc::new(ProcessRunner::new(
        GIT_PROGRAM,
        config.workspace_root.clone(),
    ));
    let git = Arc::new(GitCli::new(runner));
    let context = AppContext::new(config, git);

    report::run(&context, &mut std::io::stdout()).await
}
