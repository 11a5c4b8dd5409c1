//! agentgauge - agent-readiness scoring for OpenAPI documents
//!
//! A local-first CLI that scores how usable an API specification is for
//! autonomous AI agents, across six explainable dimensions.

use agentgauge::cli;
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    // Parse CLI args and run
    let cli = cli::Cli::parse();
    cli::run(cli)
}
