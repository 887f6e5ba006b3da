//! Entry aggregate
//!
//! The raw fields of one billable ride, as a caller hands them over.

pub mod model;

pub use model::{BillingInput, EntryRecord, UsageInput};
