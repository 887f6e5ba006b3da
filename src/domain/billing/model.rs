//! Usage and billing breakdown types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::slot::SlotLimit;
use crate::support::money::format_amount;

/// Elapsed time and distance for an entry, with overage against its slot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limits: Option<SlotLimit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travelled_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travelled_hours: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub travelled_kms: Option<Decimal>,
    /// Whole hours over the slot allowance
    pub extra_hours: u64,
    /// Whole kilometres over the slot allowance
    pub extra_kms: u64,
}

/// Usage plus the priced breakdown for an entry.
///
/// Every amount is in whole currency units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingResult {
    #[serde(flatten)]
    pub usage: UsageResult,
    pub rate: i64,
    pub extra_per_hour: i64,
    pub extra_per_km: i64,
    pub tolls: i64,
    pub extra_time_cost: i64,
    pub extra_kms_cost: i64,
    pub total: i64,
}

impl BillingResult {
    pub fn format_total(&self, currency: &str) -> String {
        format_amount(self.total, currency)
    }
}

/// A billed entry inside a statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementLine {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub billing: BillingResult,
}

/// Per-entry breakdowns for a batch of entries and the sum of their totals.
///
/// Tax and invoice numbering belong to the invoice generator, not here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingStatement {
    pub lines: Vec<StatementLine>,
    pub entry_count: usize,
    pub grand_total: i64,
}

impl BillingStatement {
    pub fn format_grand_total(&self, currency: &str) -> String {
        format_amount(self.grand_total, currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_measures_are_not_serialized() {
        let result = BillingResult {
            rate: 2000,
            total: 2000,
            ..BillingResult::default()
        };
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("travelled_kms").is_none());
        assert!(json.get("limits").is_none());
        assert_eq!(json["extra_hours"], 0);
        assert_eq!(json["total"], 2000);
    }

    #[test]
    fn format_total_helper() {
        let result = BillingResult {
            total: 1500,
            ..BillingResult::default()
        };
        assert_eq!(result.format_total("INR"), "1500 INR");
    }

    #[test]
    fn statement_format_grand_total() {
        let statement = BillingStatement {
            grand_total: 3500,
            ..BillingStatement::default()
        };
        assert_eq!(statement.format_grand_total("INR"), "3500 INR");
    }
}
