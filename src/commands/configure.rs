use crate::cli::ConfigCommands;
use crate::config::Config;
use crate::utils::output::print_success;
use anyhow::Result;

pub fn handle_config_command(config: Config, command: Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => handle_show_command(&config),
        Some(ConfigCommands::Reset) => handle_reset_command(),
    }
}

fn handle_show_command(config: &Config) -> Result<()> {
    println!("⚙️  Finlens Configuration");
    println!("========================");

    println!("General:");
    println!("  Color: {}", config.general.color);
    if let Some(format) = &config.general.format {
        println!("  Default format: {}", format);
    }

    println!("Thresholds:");
    println!("  Revenue floor: {}", config.thresholds.revenue_floor);
    println!(
        "  Borrowing ratio ceiling: {}",
        config.thresholds.borrowing_ratio_ceiling
    );
    println!("  ISCR floor: {}", config.thresholds.iscr_floor);

    println!("\nConfig file: {}", Config::config_file_path().display());

    Ok(())
}

fn handle_reset_command() -> Result<()> {
    let default_config = Config::default();
    default_config.save()?;
    print_success("Configuration reset to defaults");
    Ok(())
}
