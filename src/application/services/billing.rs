//! Entry billing calculations
//!
//! Pure functions: parse the entry's times and readings, resolve the slot
//! allowance, measure overage, then price it. Missing or malformed data never
//! fails a calculation; it simply contributes no overage.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    resolve_slot_limits, BillingInput, BillingResult, BillingStatement, EntryRecord,
    StatementLine, UsageInput, UsageResult,
};
use crate::support::money::{non_negative, round_currency};
use crate::support::time::{parse_time_of_day, MINUTES_PER_DAY};

/// Measure elapsed time and distance for an entry and the overage against its slot.
pub fn compute_usage(input: &UsageInput) -> UsageResult {
    let limits = resolve_slot_limits(input.slot_name());

    let start = input.start_time.as_deref().and_then(parse_time_of_day);
    let end = input.end_time.as_deref().and_then(parse_time_of_day);
    let travelled_minutes = match (start, end) {
        (Some(start), Some(end)) if end >= start => Some(end - start),
        // Overnight trip crossing midnight
        (Some(start), Some(end)) => Some(end + MINUTES_PER_DAY - start),
        _ => None,
    };
    let travelled_hours = travelled_minutes.map(|minutes| Decimal::from(minutes) / Decimal::from(60));

    let travelled_kms = match (input.odometer_start, input.odometer_end) {
        // A difference too large for Decimal is as unknown as a backwards odometer.
        (Some(start), Some(end)) if end >= start => end.checked_sub(start),
        _ => None,
    };

    let (extra_hours, extra_kms) = match limits {
        Some(limit) => (
            travelled_hours.map_or(0, |hours| overage(hours, limit.hours_decimal())),
            travelled_kms.map_or(0, |kms| overage(kms, limit.kms_decimal())),
        ),
        None => (0, 0),
    };

    UsageResult {
        limits,
        travelled_minutes,
        travelled_hours,
        travelled_kms,
        extra_hours,
        extra_kms,
    }
}

/// Price an entry: base rate, overage at per-unit prices, and tolls.
///
/// Each cost component is rounded to a whole unit before the total is summed
/// and rounded again.
pub fn compute_billing(input: &BillingInput) -> BillingResult {
    let usage = compute_usage(&input.usage);

    let rate = non_negative(input.rate);
    let extra_per_hour = non_negative(input.extra_per_hour);
    let extra_per_km = non_negative(input.extra_per_km);
    let tolls = non_negative(input.tolls);

    let extra_time_cost =
        round_currency(Decimal::from(usage.extra_hours).saturating_mul(extra_per_hour));
    let extra_kms_cost = round_currency(Decimal::from(usage.extra_kms).saturating_mul(extra_per_km));
    let total = round_currency(
        rate.saturating_add(Decimal::from(extra_time_cost))
            .saturating_add(Decimal::from(extra_kms_cost))
            .saturating_add(tolls),
    );

    debug!(
        slot = input.usage.slot_name(),
        extra_hours = usage.extra_hours,
        extra_kms = usage.extra_kms,
        extra_time_cost,
        extra_kms_cost,
        total,
        "entry billed"
    );

    BillingResult {
        usage,
        rate: round_currency(rate),
        extra_per_hour: round_currency(extra_per_hour),
        extra_per_km: round_currency(extra_per_km),
        tolls: round_currency(tolls),
        extra_time_cost,
        extra_kms_cost,
        total,
    }
}

/// Bill each record independently and sum the totals.
pub fn bill_entries(records: &[EntryRecord]) -> BillingStatement {
    let lines: Vec<StatementLine> = records
        .iter()
        .map(|record| StatementLine {
            id: record.id.clone(),
            date: record.date,
            billing: compute_billing(&record.billing),
        })
        .collect();
    let grand_total = lines
        .iter()
        .fold(0i64, |sum, line| sum.saturating_add(line.billing.total));

    debug!(entries = lines.len(), grand_total, "statement billed");

    BillingStatement {
        entry_count: lines.len(),
        grand_total,
        lines,
    }
}

/// Whole units by which `used` exceeds `allowed`, rounded up; zero when within.
fn overage(used: Decimal, allowed: Decimal) -> u64 {
    let Some(excess) = used.checked_sub(allowed).map(|excess| excess.ceil()) else {
        return if used > allowed { u64::MAX } else { 0 };
    };
    if excess <= Decimal::ZERO {
        return 0;
    }
    excess.to_u64().unwrap_or(u64::MAX)
}

// ── Tests ──────────────────────────────────────────────────────
