//! Core billing types: slots, entry inputs and billing breakdowns.

pub mod billing;
pub mod entry;
pub mod slot;

// Re-export commonly used types
pub use billing::{BillingResult, BillingStatement, StatementLine, UsageResult};
pub use entry::{BillingInput, EntryRecord, UsageInput};
pub use slot::{resolve_slot_limits, slot_catalogue, SlotLimit};
