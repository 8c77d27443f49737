use crate::core::data::{Flag, FlagReport};
use crate::utils::format::{format_amount, format_crore, format_ratio};
use anyhow::Result;
use colored::*;

pub struct OutputStyle;

impl OutputStyle {
    pub fn title(text: &str) -> ColoredString {
        text.bright_blue().bold()
    }

    pub fn header(text: &str) -> ColoredString {
        text.bold()
    }

    pub fn label(text: &str) -> ColoredString {
        text.cyan()
    }

    pub fn value(text: &str) -> ColoredString {
        text.clear()
    }

    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    pub fn muted(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Color a flag name with its own color.
    pub fn flag(flag: Flag) -> ColoredString {
        match flag {
            Flag::Green => flag.name().green(),
            Flag::Amber => flag.name().yellow(),
            Flag::Red => flag.name().red(),
            Flag::MediumRisk => flag.name().magenta(),
            Flag::White => flag.name().dimmed(),
        }
    }

    pub fn separator() -> String {
        "─".repeat(50)
    }

    pub fn header_separator() -> String {
        "═".repeat(50)
    }

    pub fn print_header(title: &str) {
        println!("{}", Self::title(title));
        println!("{}", Self::header_separator());
    }

    pub fn print_field_colored(label: &str, value: &str, color_fn: impl Fn(&str) -> ColoredString) {
        println!("{:>24}: {}", Self::label(label), color_fn(value));
    }

    pub fn print_flag_field(label: &str, flag: Flag) {
        println!("{:>24}: {}", Self::label(label), Self::flag(flag));
    }
}

/// Display formatter for evaluation results.
pub struct DisplayFormatter;

impl DisplayFormatter {
    /// Print the report as JSON, matching the wire encoding.
    pub fn print_json(report: &FlagReport) -> Result<()> {
        let json = serde_json::to_string_pretty(report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize flag report: {}", e))?;
        println!("{}", json);
        Ok(())
    }

    /// Print the report as a colored flag summary.
    pub fn print_pretty(report: &FlagReport) {
        OutputStyle::print_header("🚩 Financial Flags");
        OutputStyle::print_flag_field("TOTAL_REVENUE_5CR_FLAG", report.flags.total_revenue_5cr);
        OutputStyle::print_flag_field("BORROWING_TO_REVENUE_FLAG", report.flags.borrowing_to_revenue);
        OutputStyle::print_flag_field("ISCR_FLAG", report.flags.iscr);
    }

    /// Print the full metric breakdown behind a report.
    pub fn print_breakdown(
        index: usize,
        revenue: f64,
        borrowing_ratio: f64,
        iscr: f64,
        report: &FlagReport,
    ) {
        OutputStyle::print_header("📊 Financial Breakdown");

        OutputStyle::print_field_colored(
            "Financial index",
            &index.to_string(),
            OutputStyle::muted,
        );
        OutputStyle::print_field_colored(
            "Total revenue",
            &format!("{} ({})", format_amount(revenue), format_crore(revenue)),
            OutputStyle::value,
        );
        OutputStyle::print_field_colored(
            "Borrowing / revenue",
            &format_ratio(borrowing_ratio),
            OutputStyle::value,
        );
        OutputStyle::print_field_colored("ISCR", &format_ratio(iscr), OutputStyle::value);

        println!("{}", OutputStyle::separator());
        OutputStyle::print_flag_field("TOTAL_REVENUE_5CR_FLAG", report.flags.total_revenue_5cr);
        OutputStyle::print_flag_field("BORROWING_TO_REVENUE_FLAG", report.flags.borrowing_to_revenue);
        OutputStyle::print_flag_field("ISCR_FLAG", report.flags.iscr);
    }
}

pub fn print_warning(message: &str) {
    println!("⚠️  {}", OutputStyle::warning(message));
}

pub fn print_success(message: &str) {
    println!("✅ {}", OutputStyle::success(message));
}
