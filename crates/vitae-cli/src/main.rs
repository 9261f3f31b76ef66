//! Vitae CLI - command-line interface for semantic CV analysis.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Command};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args),
        Command::Prompt(args) => commands::execute_prompt(args),
        Command::Selftest => commands::execute_selftest(),
        Command::Extract(args) => commands::execute_extract(args).await,
    }
}
