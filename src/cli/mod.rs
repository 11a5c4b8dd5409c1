//! CLI command definitions and handlers

mod init;
mod score;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parse and validate a score threshold (0-100)
fn parse_threshold(s: &str) -> Result<u8, String> {
    let n: u8 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid score", s))?;
    if n > 100 {
        Err("threshold cannot exceed 100".to_string())
    } else {
        Ok(n)
    }
}

/// agentgauge - agent-readiness scoring for OpenAPI documents
#[derive(Parser, Debug)]
#[command(name = "agentgauge")]
#[command(
    version,
    about = "Score how usable an OpenAPI document is for autonomous AI agents",
    long_about = "agentgauge walks an OpenAPI 3.x document and computes a deterministic, \
explainable readiness score across six dimensions: foundational compliance, semantic \
richness, agent usability, AI discoverability, security, and error recoverability.\n\n\
The engine is pure and local: no network calls are made except to fetch a spec you \
point it at by URL.",
    after_help = "\
Examples:
  agentgauge score openapi.yaml                 Score a local spec
  agentgauge score https://example.com/api.yml  Fetch and score a remote spec
  cat openapi.json | agentgauge score -         Score from stdin
  agentgauge score api.yaml --format json       JSON output for scripting
  agentgauge score api.yaml --issues lint.json  Feed upstream validator issues
  agentgauge score api.yaml --fail-under 60     Exit 1 below 60 (CI mode)
  agentgauge init                               Write a default agentgauge.toml"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score an OpenAPI document for agent readiness
    Score {
        /// Path to the spec, '-' for stdin, or an http(s) URL
        spec: String,

        /// JSON file with validation issues from upstream validators
        #[arg(long)]
        issues: Option<PathBuf>,

        /// Output format: text, json, markdown (or md)
        #[arg(long, short = 'f', default_value = "text", value_parser = ["text", "json", "markdown", "md"])]
        format: String,

        /// Output file path (default: stdout)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Exit with code 1 if the overall score is below this value (0-100)
        #[arg(long, value_parser = parse_threshold)]
        fail_under: Option<u8>,

        /// Directory to load agentgauge.toml from (default: current directory)
        #[arg(long, default_value = ".")]
        config_dir: PathBuf,
    },

    /// Write a commented agentgauge.toml with the default methodology
    Init {
        /// Directory to write the config into
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

/// Dispatch a parsed CLI invocation
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score {
            spec,
            issues,
            format,
            output,
            fail_under,
            config_dir,
        } => score::run(score::ScoreArgs {
            spec,
            issues,
            format,
            output,
            fail_under,
            config_dir,
        }),
        Commands::Init { path } => init::run(&path),
    }
}
