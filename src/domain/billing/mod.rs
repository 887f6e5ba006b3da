//! Billing results
//!
//! Read-only breakdowns produced by the usage and billing calculators.

pub mod model;

pub use model::{BillingResult, BillingStatement, StatementLine, UsageResult};
