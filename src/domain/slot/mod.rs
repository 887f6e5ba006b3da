//! Slot aggregate
//!
//! Named service-duration tiers and the allowance each one includes.

pub mod model;

pub use model::{resolve_slot_limits, slot_catalogue, SlotLimit};
