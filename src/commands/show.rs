use crate::cli::ShowArgs;
use crate::config::Config;
use crate::core::evaluator::Evaluator;
use crate::core::ratios;
use crate::utils::output::DisplayFormatter;
use anyhow::Result;

pub fn handle_show_command(config: Config, args: &ShowArgs) -> Result<()> {
    let data = super::load_record(&args.file, args.bare)?;

    let evaluator = Evaluator::new(&config);
    let report = evaluator.evaluate(&data);

    let index = ratios::latest_financial_index(&data);
    let revenue = ratios::total_revenue(&data, index);
    let borrowing_ratio = ratios::borrowing_to_revenue(&data, index);
    let iscr = ratios::iscr(&data, index);

    DisplayFormatter::print_breakdown(index, revenue, borrowing_ratio, iscr, &report);

    Ok(())
}
