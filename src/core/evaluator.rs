//! Flag evaluator
//!
//! The single orchestration step of the crate: derive the latest financial
//! index once, run the three flag rules against it in order, and assemble
//! the nested report.

use crate::config::{Config, Thresholds};
use crate::core::data::{FinancialData, FlagReport, FlagSet};
use crate::core::ratios;

/// Evaluates a financial record into a [`FlagReport`].
///
/// Stateless between calls; carries only the threshold configuration the
/// flag rules compare against.
pub struct Evaluator {
    thresholds: Thresholds,
}

impl Evaluator {
    /// Create an evaluator using the thresholds from the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            thresholds: config.thresholds.clone(),
        }
    }

    /// Create an evaluator with explicit thresholds.
    pub fn with_thresholds(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Evaluate a record into its three-flag report.
    ///
    /// The index is computed once and each flag is derived eagerly from the
    /// record and that index. The input is never mutated and identical
    /// records always produce identical reports.
    pub fn evaluate(&self, data: &FinancialData) -> FlagReport {
        let index = ratios::latest_financial_index(data);

        let total_revenue_5cr = ratios::total_revenue_5cr_flag(data, index, &self.thresholds);
        let borrowing_to_revenue =
            ratios::borrowing_to_revenue_flag(data, index, &self.thresholds);
        let iscr = ratios::iscr_flag(data, index, &self.thresholds);

        FlagReport {
            flags: FlagSet {
                total_revenue_5cr,
                borrowing_to_revenue,
                iscr,
            },
        }
    }
}
