//! Finlens - A Rust-based financial health flag evaluation tool
//!
//! This library evaluates a company's financial record into a small set of
//! health flags: a revenue threshold check, a borrowing-to-revenue ratio
//! check, and an interest service coverage check.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod utils;

// Re-export core types for easier use
pub use crate::core::{
    data::{FinancialData, FinancialEntry, Flag, FlagReport, FlagSet, InputEnvelope, Nature},
    evaluator::Evaluator,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Main library interface for external usage
pub struct Finlens {
    evaluator: Evaluator,
}

impl Finlens {
    /// Create a new Finlens instance with the given configuration
    pub fn new(config: &config::Config) -> Self {
        Self {
            evaluator: Evaluator::new(config),
        }
    }

    /// Evaluate a financial record into its flag report
    pub fn evaluate(&self, data: &FinancialData) -> FlagReport {
        self.evaluator.evaluate(data)
    }
}
