use crate::commands::{configure, evaluate, show};
use crate::config::Config;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "finlens")]
#[command(about = "A Rust-based financial health flag evaluation tool")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Commands {
    pub fn execute(self, config: Config) -> Result<()> {
        match self {
            Commands::Evaluate(args) => {
                evaluate::handle_evaluate_command(config, &args)?;
            }
            Commands::Show(args) => {
                show::handle_show_command(config, &args)?;
            }
            Commands::Config(args) => {
                configure::handle_config_command(config, args.command.clone())?;
            }
        }
        Ok(())
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate financial flags from a JSON data file
    Evaluate(EvaluateArgs),

    /// Show the full metric breakdown behind the flags
    Show(ShowArgs),

    /// Configuration management
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct EvaluateArgs {
    #[arg(default_value = "data.json", help = "JSON file with the financial record")]
    pub file: PathBuf,

    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Treat the file as a bare record without the 'data' envelope")]
    pub bare: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    #[arg(default_value = "data.json", help = "JSON file with the financial record")]
    pub file: PathBuf,

    #[arg(long, help = "Treat the file as a bare record without the 'data' envelope")]
    pub bare: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommands>,
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}
