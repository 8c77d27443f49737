use crate::cli::{EvaluateArgs, OutputFormat};
use crate::config::Config;
use crate::core::evaluator::Evaluator;
use crate::utils::output::DisplayFormatter;
use anyhow::Result;

pub fn handle_evaluate_command(config: Config, args: &EvaluateArgs) -> Result<()> {
    let data = super::load_record(&args.file, args.bare)?;

    let evaluator = Evaluator::new(&config);
    let report = evaluator.evaluate(&data);

    match resolve_format(args.format, &config) {
        OutputFormat::Json => DisplayFormatter::print_json(&report)?,
        OutputFormat::Pretty => DisplayFormatter::print_pretty(&report),
    }

    Ok(())
}

/// CLI flag wins over the configured default; JSON is the fallback.
fn resolve_format(cli_format: Option<OutputFormat>, config: &Config) -> OutputFormat {
    if let Some(format) = cli_format {
        return format;
    }

    match config.general.format.as_deref() {
        Some("pretty") => OutputFormat::Pretty,
        _ => OutputFormat::Json,
    }
}
