//! # Cab Billing
//!
//! Per-entry billing for corporate cab rides: slot allowances, time and
//! odometer overage, and whole-unit currency rounding.
//!
//! ## Architecture
//!
//! - **domain**: Slot table, entry inputs and billing breakdown types
//! - **application**: The usage and billing calculators
//! - **infrastructure**: Loading entry records from JSON files
//! - **support**: Time parsing, money rounding, lenient numeric fields, errors
//!
//! Every calculation is pure: no I/O, no shared state, and no failure path.
//! Missing or malformed entry data contributes no overage instead of erroring.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod logging;
pub mod support;

pub use config::{default_config_path, AppConfig};

// Re-export the calculator API
pub use application::{bill_entries, compute_billing, compute_usage};
pub use domain::{
    resolve_slot_limits, slot_catalogue, BillingInput, BillingResult, BillingStatement,
    EntryRecord, SlotLimit, StatementLine, UsageInput, UsageResult,
};
pub use support::time::parse_time_of_day;
