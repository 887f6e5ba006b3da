//! Slot limit table

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Included allowance for a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotLimit {
    /// Included duration in hours
    pub hours: u32,
    /// Included distance in kilometres
    pub kms: u32,
}

impl SlotLimit {
    pub const fn new(hours: u32, kms: u32) -> Self {
        Self { hours, kms }
    }

    pub fn hours_decimal(&self) -> Decimal {
        Decimal::from(self.hours)
    }

    pub fn kms_decimal(&self) -> Decimal {
        Decimal::from(self.kms)
    }
}

const SLOT_LIMITS: &[(&str, SlotLimit)] = &[
    ("4hr", SlotLimit::new(4, 40)),
    ("8hr", SlotLimit::new(8, 80)),
];

/// Look up the allowance for a slot name.
///
/// Unknown or empty names have no limit, which is not the same as a zero limit:
/// no overage is ever charged against them.
pub fn resolve_slot_limits(slot: &str) -> Option<SlotLimit> {
    let limit = SLOT_LIMITS
        .iter()
        .find(|(name, _)| *name == slot)
        .map(|(_, limit)| *limit);
    if limit.is_none() && !slot.is_empty() {
        trace!(slot, "no limit configured for slot");
    }
    limit
}

/// Every known slot, in table order.
pub fn slot_catalogue() -> &'static [(&'static str, SlotLimit)] {
    SLOT_LIMITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_slots_resolve() {
        assert_eq!(resolve_slot_limits("4hr"), Some(SlotLimit::new(4, 40)));
        assert_eq!(resolve_slot_limits("8hr"), Some(SlotLimit::new(8, 80)));
    }

    #[test]
    fn unknown_slots_have_no_limit() {
        assert_eq!(resolve_slot_limits("12hr"), None);
        assert_eq!(resolve_slot_limits(""), None);
        assert_eq!(resolve_slot_limits("4HR"), None);
    }

    #[test]
    fn catalogue_lists_table_in_order() {
        let names: Vec<_> = slot_catalogue().iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["4hr", "8hr"]);
    }
}
