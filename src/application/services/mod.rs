//! Application services

mod billing;

pub use billing::{bill_entries, compute_billing, compute_usage};
