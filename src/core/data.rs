//! Core data structures for financial flag evaluation
//!
//! This module contains the typed financial record consumed by the
//! evaluator and the flag vocabulary it reports.

use serde::de::{Error as DeError, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Top-level financial record for a single company.
///
/// The `financials` key is required; a record without it is rejected at
/// parse time rather than silently evaluated as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialData {
    pub financials: Vec<FinancialEntry>,
}

/// One reported financial period (standalone or consolidated).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinancialEntry {
    #[serde(default)]
    pub nature: Nature,
    #[serde(default)]
    pub pnl: ProfitAndLoss,
    #[serde(default)]
    pub bs: BalanceSheet,
}

/// Nature of a financial statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Nature {
    Standalone,
    Consolidated,
    /// Any other nature string; never selected by the index rule.
    #[default]
    #[serde(other)]
    Other,
}

/// Profit and loss section of a financial entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfitAndLoss {
    #[serde(rename = "lineItems", default)]
    pub line_items: LineItems,
    #[serde(default)]
    pub depreciation_breakup: DepreciationBreakup,
}

/// P&L line items used by the ratio rules.
///
/// Missing amounts deserialize as zero, which the flag rules treat as
/// "data missing" (White).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineItems {
    #[serde(default)]
    pub net_revenue: f64,
    #[serde(default)]
    pub profit_before_interest_and_tax: f64,
    #[serde(default)]
    pub interest: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DepreciationBreakup {
    #[serde(default)]
    pub depreciation_and_amortization: f64,
}

/// Balance sheet section of a financial entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BalanceSheet {
    #[serde(default)]
    pub liabilities: Liabilities,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Liabilities {
    #[serde(default)]
    pub long_term_borrowings: f64,
    #[serde(default)]
    pub short_term_borrowings: f64,
}

/// On-disk input file: the record sits under a `"data"` key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputEnvelope {
    pub data: FinancialData,
}

/// Flag color reported for each rated condition.
///
/// Serialized as its numeric code so the JSON output stays stable for
/// downstream consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Red,
    Green,
    Amber,
    /// Display purpose only; never produced by the ratio rules.
    MediumRisk,
    /// Data is missing for this field.
    White,
}

impl Flag {
    /// Numeric wire code for this flag.
    pub fn code(self) -> u8 {
        match self {
            Flag::Red => 0,
            Flag::Green => 1,
            Flag::Amber => 2,
            Flag::MediumRisk => 3,
            Flag::White => 4,
        }
    }

    /// Parse a numeric wire code back into a flag.
    pub fn from_code(code: u8) -> Option<Flag> {
        match code {
            0 => Some(Flag::Red),
            1 => Some(Flag::Green),
            2 => Some(Flag::Amber),
            3 => Some(Flag::MediumRisk),
            4 => Some(Flag::White),
            _ => None,
        }
    }

    /// Human-readable name used in pretty output.
    pub fn name(self) -> &'static str {
        match self {
            Flag::Red => "RED",
            Flag::Green => "GREEN",
            Flag::Amber => "AMBER",
            Flag::MediumRisk => "MEDIUM_RISK",
            Flag::White => "WHITE",
        }
    }
}

impl Serialize for Flag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = u8::deserialize(deserializer)?;
        Flag::from_code(code).ok_or_else(|| {
            D::Error::invalid_value(Unexpected::Unsigned(code as u64), &"a flag code in 0..=4")
        })
    }
}

impl std::fmt::Display for Flag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of one evaluation: a single `flags` mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagReport {
    pub flags: FlagSet,
}

/// The three rated conditions, keyed with their canonical wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlagSet {
    #[serde(rename = "TOTAL_REVENUE_5CR_FLAG")]
    pub total_revenue_5cr: Flag,
    #[serde(rename = "BORROWING_TO_REVENUE_FLAG")]
    pub borrowing_to_revenue: Flag,
    #[serde(rename = "ISCR_FLAG")]
    pub iscr: Flag,
}

impl FinancialData {
    /// Entry at the given index, if one exists.
    pub fn entry(&self, index: usize) -> Option<&FinancialEntry> {
        self.financials.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_codes_round_trip() {
        for flag in [
            Flag::Red,
            Flag::Green,
            Flag::Amber,
            Flag::MediumRisk,
            Flag::White,
        ] {
            assert_eq!(Flag::from_code(flag.code()), Some(flag));
        }
        assert_eq!(Flag::from_code(5), None);
    }

    #[test]
    fn test_flag_serializes_as_integer() {
        let json = serde_json::to_string(&Flag::Green).unwrap();
        assert_eq!(json, "1");
        let back: Flag = serde_json::from_str("4").unwrap();
        assert_eq!(back, Flag::White);
    }

    #[test]
    fn test_report_uses_canonical_keys() {
        let report = FlagReport {
            flags: FlagSet {
                total_revenue_5cr: Flag::Green,
                borrowing_to_revenue: Flag::Amber,
                iscr: Flag::Red,
            },
        };

        let value = serde_json::to_value(&report).unwrap();
        let flags = value.get("flags").unwrap();
        assert_eq!(flags.get("TOTAL_REVENUE_5CR_FLAG").unwrap(), 1);
        assert_eq!(flags.get("BORROWING_TO_REVENUE_FLAG").unwrap(), 2);
        assert_eq!(flags.get("ISCR_FLAG").unwrap(), 0);
        assert_eq!(flags.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_missing_amounts_default_to_zero() {
        let json = r#"{
            "financials": [
                { "nature": "STANDALONE", "pnl": { "lineItems": { "net_revenue": 1000.0 } } }
            ]
        }"#;

        let data: FinancialData = serde_json::from_str(json).unwrap();
        let entry = data.entry(0).unwrap();
        assert_eq!(entry.nature, Nature::Standalone);
        assert_eq!(entry.pnl.line_items.net_revenue, 1000.0);
        assert_eq!(entry.pnl.line_items.interest, 0.0);
        assert_eq!(entry.bs.liabilities.long_term_borrowings, 0.0);
    }

    #[test]
    fn test_missing_financials_key_is_rejected() {
        let result: Result<FinancialData, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_nature_maps_to_other() {
        let json = r#"{ "financials": [ { "nature": "INTERIM" } ] }"#;
        let data: FinancialData = serde_json::from_str(json).unwrap();
        assert_eq!(data.entry(0).unwrap().nature, Nature::Other);
    }
}
