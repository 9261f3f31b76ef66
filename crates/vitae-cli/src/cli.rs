//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Vitae CLI - semantic CV analysis and augmented extraction.
#[derive(Debug, Parser)]
#[command(name = "vitae")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze a document offline: signals, classification, confidence
    Analyze(AnalyzeArgs),

    /// Print the extraction prompt synthesized for a document
    Prompt(PromptArgs),

    /// Run the embedded pipeline self-test
    Selftest,

    /// Run one augmented extraction against a live endpoint
    Extract(ExtractArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Document file to analyze
    pub file: PathBuf,

    /// Directory of rule tables to use instead of the builtin set
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Emit the full analysis as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the prompt command.
#[derive(Debug, Parser)]
pub struct PromptArgs {
    /// Document file to synthesize a prompt for
    pub file: PathBuf,

    /// Directory of rule tables to use instead of the builtin set
    #[arg(long)]
    pub rules: Option<PathBuf>,
}

/// Arguments for the extract command.
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Document file to extract
    pub file: PathBuf,

    /// Base URL of an OpenAI-compatible endpoint
    #[arg(long)]
    pub endpoint: String,

    /// Model name to request
    #[arg(long)]
    pub model: String,

    /// Environment variable holding the API key
    #[arg(long, default_value = "VITAE_API_KEY")]
    pub api_key_env: String,
}
