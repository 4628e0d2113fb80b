use anyhow::Result;
use colored::Colorize;
use pizza_pricing::{config, server};
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// Loads configuration and serves until a shutdown signal arrives
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting pizza pricing server...".green());

    let cfg = config::load_config(config_path)?;
    info!(config = %config_path.display(), "Configuration loaded");

    server::start_server(cfg).await?;

    Ok(())
}
