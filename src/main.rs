use anyhow::Result;
use clap::Parser;

use finlens::cli::Cli;
use finlens::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    if !config.general.color {
        colored::control::set_override(false);
    }

    // Execute command
    cli.command.execute(config)?;

    Ok(())
}
