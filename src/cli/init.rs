//! Init command - write a starter agentgauge.toml

use crate::config::default_config_toml;
use anyhow::{Context, Result};
use std::path::Path;

/// Run the init command
pub fn run(path: &Path) -> Result<()> {
    let dir = path
        .canonicalize()
        .with_context(|| format!("Path does not exist: {}", path.display()))?;

    if !dir.is_dir() {
        anyhow::bail!("Path is not a directory: {}", dir.display());
    }

    let config_path = dir.join("agentgauge.toml");
    if config_path.exists() {
        println!("✓ Already initialized at {}", config_path.display());
        return Ok(());
    }

    std::fs::write(&config_path, default_config_toml())
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("✓ Wrote {}", config_path.display());
    println!("  Edit it to adjust weights, thresholds, or vocabulary, then run:");
    println!("  agentgauge score <your-openapi.yaml>");

    Ok(())
}
