//! Entry input types

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::support::serializations::{lenient_decimal, lenient_string};

/// Usage fields of an entry: which slot, when, and how far.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageInput {
    #[serde(default, deserialize_with = "lenient_string")]
    pub slot: Option<String>,
    /// Time of day, `HH:MM` or `H:MM AM/PM`
    #[serde(default, deserialize_with = "lenient_string")]
    pub start_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub end_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub odometer_start: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub odometer_end: Option<Decimal>,
}

impl UsageInput {
    pub fn new(
        slot: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            slot: Some(slot.into()),
            start_time: Some(start_time.into()),
            end_time: Some(end_time.into()),
            ..Self::default()
        }
    }

    pub fn with_odometer(mut self, start: impl Into<Decimal>, end: impl Into<Decimal>) -> Self {
        self.odometer_start = Some(start.into());
        self.odometer_end = Some(end.into());
        self
    }

    pub fn slot_name(&self) -> &str {
        self.slot.as_deref().unwrap_or("")
    }
}

/// Usage fields plus the prices an entry is billed at.
///
/// Every price is optional; absent means zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BillingInput {
    #[serde(flatten)]
    pub usage: UsageInput,
    /// Base fare for the slot
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub rate: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub extra_per_hour: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub extra_per_km: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub tolls: Option<Decimal>,
}

impl BillingInput {
    pub fn new(usage: UsageInput) -> Self {
        Self {
            usage,
            ..Self::default()
        }
    }

    pub fn with_rate(mut self, rate: impl Into<Decimal>) -> Self {
        self.rate = Some(rate.into());
        self
    }

    pub fn with_extra_prices(
        mut self,
        per_hour: impl Into<Decimal>,
        per_km: impl Into<Decimal>,
    ) -> Self {
        self.extra_per_hour = Some(per_hour.into());
        self.extra_per_km = Some(per_km.into());
        self
    }

    pub fn with_tolls(mut self, tolls: impl Into<Decimal>) -> Self {
        self.tolls = Some(tolls.into());
        self
    }
}

/// One ride entry as stored upstream: billing fields plus identification
/// that is carried through to the statement untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(flatten)]
    pub billing: BillingInput,
}
