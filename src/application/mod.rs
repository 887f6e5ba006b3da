pub mod services;

pub use services::{bill_entries, compute_billing, compute_usage};
