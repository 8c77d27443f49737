//! Ratio computations and flag rules
//!
//! Pure functions over a [`FinancialData`] record. Each metric reads the
//! financial entry at the supplied index and treats a missing entry as a
//! zero value; the flag rules in turn treat zero metrics as missing data
//! and report [`Flag::White`].

use crate::config::Thresholds;
use crate::core::data::{FinancialData, Flag, Nature};

/// Index of the latest standalone financial entry.
///
/// Returns the position of the first entry whose nature is `STANDALONE`,
/// or 0 when no standalone entry exists.
pub fn latest_financial_index(data: &FinancialData) -> usize {
    data.financials
        .iter()
        .position(|entry| entry.nature == Nature::Standalone)
        .unwrap_or(0)
}

/// Net revenue reported at the given index, or 0 when the entry is absent.
pub fn total_revenue(data: &FinancialData, index: usize) -> f64 {
    data.entry(index)
        .map(|entry| entry.pnl.line_items.net_revenue)
        .unwrap_or(0.0)
}

/// Ratio of total borrowings (long-term + short-term) to net revenue.
///
/// Returns 0 when the entry is absent or revenue is zero, so a company
/// with no reported revenue is not flagged on borrowing.
pub fn borrowing_to_revenue(data: &FinancialData, index: usize) -> f64 {
    let Some(entry) = data.entry(index) else {
        return 0.0;
    };

    let borrowings =
        entry.bs.liabilities.long_term_borrowings + entry.bs.liabilities.short_term_borrowings;
    let revenue = total_revenue(data, index);
    if revenue == 0.0 {
        return 0.0;
    }
    borrowings / revenue
}

/// Interest Service Coverage Ratio at the given index.
///
/// Computed as (PBIT + depreciation + 1) / (interest + 1); the +1 on both
/// sides keeps the ratio defined when interest is zero. Returns 0 when the
/// entry is absent.
pub fn iscr(data: &FinancialData, index: usize) -> f64 {
    let Some(entry) = data.entry(index) else {
        return 0.0;
    };

    let pbit = entry.pnl.line_items.profit_before_interest_and_tax;
    let depreciation = entry.pnl.depreciation_breakup.depreciation_and_amortization;
    let interest = entry.pnl.line_items.interest;
    (pbit + depreciation + 1.0) / (interest + 1.0)
}

/// Flag on whether net revenue clears the revenue floor (5 crore by default).
pub fn total_revenue_5cr_flag(data: &FinancialData, index: usize, thresholds: &Thresholds) -> Flag {
    let revenue = total_revenue(data, index);
    if revenue == 0.0 {
        Flag::White
    } else if revenue >= thresholds.revenue_floor {
        Flag::Green
    } else {
        Flag::Red
    }
}

/// Flag on the borrowing-to-revenue ratio against the configured ceiling.
pub fn borrowing_to_revenue_flag(
    data: &FinancialData,
    index: usize,
    thresholds: &Thresholds,
) -> Flag {
    let ratio = borrowing_to_revenue(data, index);
    if ratio == 0.0 {
        Flag::White
    } else if ratio <= thresholds.borrowing_ratio_ceiling {
        Flag::Green
    } else {
        Flag::Amber
    }
}

/// Flag on whether the ISCR clears the configured floor.
pub fn iscr_flag(data: &FinancialData, index: usize, thresholds: &Thresholds) -> Flag {
    let value = iscr(data, index);
    if value == 0.0 {
        Flag::White
    } else if value >= thresholds.iscr_floor {
        Flag::Green
    } else {
        Flag::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::{FinancialEntry, Nature};

    fn entry(nature: Nature) -> FinancialEntry {
        FinancialEntry {
            nature,
            ..Default::default()
        }
    }

    fn single_entry_data() -> FinancialData {
        let mut e = entry(Nature::Standalone);
        e.pnl.line_items.net_revenue = 60_000_000.0;
        e.pnl.line_items.profit_before_interest_and_tax = 9_000_000.0;
        e.pnl.line_items.interest = 1_000_000.0;
        e.pnl.depreciation_breakup.depreciation_and_amortization = 2_000_000.0;
        e.bs.liabilities.long_term_borrowings = 3_000_000.0;
        e.bs.liabilities.short_term_borrowings = 1_500_000.0;
        FinancialData {
            financials: vec![e],
        }
    }

    #[test]
    fn test_index_picks_first_standalone_entry() {
        let data = FinancialData {
            financials: vec![
                entry(Nature::Consolidated),
                entry(Nature::Standalone),
                entry(Nature::Standalone),
            ],
        };
        assert_eq!(latest_financial_index(&data), 1);
    }

    #[test]
    fn test_index_defaults_to_zero_without_standalone() {
        let data = FinancialData {
            financials: vec![entry(Nature::Consolidated), entry(Nature::Other)],
        };
        assert_eq!(latest_financial_index(&data), 0);

        let empty = FinancialData { financials: vec![] };
        assert_eq!(latest_financial_index(&empty), 0);
    }

    #[test]
    fn test_total_revenue_reads_net_revenue() {
        let data = single_entry_data();
        assert_eq!(total_revenue(&data, 0), 60_000_000.0);
        // Out-of-range index reads as zero rather than panicking.
        assert_eq!(total_revenue(&data, 7), 0.0);
    }

    #[test]
    fn test_borrowing_ratio() {
        let data = single_entry_data();
        let ratio = borrowing_to_revenue(&data, 0);
        assert!((ratio - 0.075).abs() < 1e-12);
    }

    #[test]
    fn test_borrowing_ratio_zero_revenue() {
        let mut data = single_entry_data();
        data.financials[0].pnl.line_items.net_revenue = 0.0;
        assert_eq!(borrowing_to_revenue(&data, 0), 0.0);
    }

    #[test]
    fn test_iscr_formula() {
        let data = single_entry_data();
        let value = iscr(&data, 0);
        // (9_000_000 + 2_000_000 + 1) / (1_000_000 + 1)
        assert!((value - 11_000_001.0 / 1_000_001.0).abs() < 1e-9);
    }

    #[test]
    fn test_iscr_defined_with_zero_interest() {
        let mut data = single_entry_data();
        data.financials[0].pnl.line_items.interest = 0.0;
        assert_eq!(iscr(&data, 0), 11_000_001.0);
    }

    #[test]
    fn test_revenue_flag_thresholds() {
        let thresholds = Thresholds::default();
        let mut data = single_entry_data();

        assert_eq!(total_revenue_5cr_flag(&data, 0, &thresholds), Flag::Green);

        data.financials[0].pnl.line_items.net_revenue = 49_999_999.0;
        assert_eq!(total_revenue_5cr_flag(&data, 0, &thresholds), Flag::Red);

        data.financials[0].pnl.line_items.net_revenue = 50_000_000.0;
        assert_eq!(total_revenue_5cr_flag(&data, 0, &thresholds), Flag::Green);

        data.financials[0].pnl.line_items.net_revenue = 0.0;
        assert_eq!(total_revenue_5cr_flag(&data, 0, &thresholds), Flag::White);
    }

    #[test]
    fn test_borrowing_flag_thresholds() {
        let thresholds = Thresholds::default();
        let mut data = single_entry_data();

        // 4.5M / 60M = 0.075, under the 0.25 ceiling.
        assert_eq!(
            borrowing_to_revenue_flag(&data, 0, &thresholds),
            Flag::Green
        );

        data.financials[0].bs.liabilities.long_term_borrowings = 20_000_000.0;
        assert_eq!(
            borrowing_to_revenue_flag(&data, 0, &thresholds),
            Flag::Amber
        );

        data.financials[0].bs.liabilities.long_term_borrowings = 0.0;
        data.financials[0].bs.liabilities.short_term_borrowings = 0.0;
        assert_eq!(
            borrowing_to_revenue_flag(&data, 0, &thresholds),
            Flag::White
        );
    }

    #[test]
    fn test_iscr_flag_thresholds() {
        let thresholds = Thresholds::default();
        let mut data = single_entry_data();

        // ISCR ~ 11.0, comfortably above the floor of 2.
        assert_eq!(iscr_flag(&data, 0, &thresholds), Flag::Green);

        data.financials[0].pnl.line_items.profit_before_interest_and_tax = 500_000.0;
        data.financials[0].pnl.depreciation_breakup.depreciation_and_amortization = 0.0;
        assert_eq!(iscr_flag(&data, 0, &thresholds), Flag::Red);

        let empty = FinancialData { financials: vec![] };
        assert_eq!(iscr_flag(&empty, 0, &thresholds), Flag::White);
    }
}
