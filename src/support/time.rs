//! Time-of-day parsing
//!
//! Entry times are typed by hand, so both clock styles show up:
//!
//! - **12-hour** `9 AM`, `9:30pm`, ` 12:05   am `
//! - **24-hour** `9:30`, `21:05`
//!
//! Anything else is treated as "no value" rather than an error.

use chrono::{NaiveTime, Timelike};
use tracing::trace;

pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a time-of-day string into minutes since midnight (`0..=1439`).
///
/// Returns `None` for empty or malformed input.
pub fn parse_time_of_day(text: &str) -> Option<u32> {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if normalized.is_empty() {
        return None;
    }

    let parsed = parse_twelve_hour(&normalized).or_else(|| parse_twenty_four_hour(&normalized));
    if parsed.is_none() {
        trace!(input = text, "unrecognised time of day");
    }
    parsed.map(|time| time.hour() * 60 + time.minute())
}

fn parse_twelve_hour(text: &str) -> Option<NaiveTime> {
    let upper = text.to_ascii_uppercase();
    let (clock, pm) = if let Some(rest) = upper.strip_suffix("PM") {
        (rest, true)
    } else if let Some(rest) = upper.strip_suffix("AM") {
        (rest, false)
    } else {
        return None;
    };
    let clock = clock.trim_end();

    let (hour, minute) = match clock.split_once(':') {
        Some((h, m)) => (digits(h, 1..=2)?, digits(m, 2..=2)?),
        None => (digits(clock, 1..=2)?, 0),
    };
    if !(1..=12).contains(&hour) || minute > 59 {
        return None;
    }

    let hour = hour % 12 + if pm { 12 } else { 0 };
    NaiveTime::from_hms_opt(hour, minute, 0)
}

fn parse_twenty_four_hour(text: &str) -> Option<NaiveTime> {
    let (h, m) = text.split_once(':')?;
    let hour = digits(h, 1..=2)?;
    let minute = digits(m, 2..=2)?;
    if hour > 23 || minute > 59 {
        return None;
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Parse an all-ASCII-digit field whose length falls in `len`.
fn digits(field: &str, len: std::ops::RangeInclusive<usize>) -> Option<u32> {
    if !len.contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_four_hour_clock() {
        assert_eq!(parse_time_of_day("00:00"), Some(0));
        assert_eq!(parse_time_of_day("9:05"), Some(545));
        assert_eq!(parse_time_of_day("14:30"), Some(870));
        assert_eq!(parse_time_of_day("23:59"), Some(1439));
    }

    #[test]
    fn twelve_hour_clock_matches_twenty_four_hour() {
        assert_eq!(parse_time_of_day("2:30 PM"), parse_time_of_day("14:30"));
        assert_eq!(parse_time_of_day("2:30 PM"), Some(870));
    }

    #[test]
    fn twelve_o_clock_edges() {
        assert_eq!(parse_time_of_day("12:00 AM"), Some(0));
        assert_eq!(parse_time_of_day("12:00 PM"), Some(720));
        assert_eq!(parse_time_of_day("12:59 am"), Some(59));
    }

    #[test]
    fn twelve_hour_without_minutes() {
        assert_eq!(parse_time_of_day("9 AM"), Some(540));
        assert_eq!(parse_time_of_day("9pm"), Some(1260));
    }

    #[test]
    fn whitespace_and_case_are_forgiven() {
        assert_eq!(parse_time_of_day("  7:15   pm "), Some(1155));
        assert_eq!(parse_time_of_day("7:15Pm"), Some(1155));
        assert_eq!(parse_time_of_day(" 08:00 "), Some(480));
    }

    #[test]
    fn out_of_range_values_are_absent() {
        assert_eq!(parse_time_of_day("24:00"), None);
        assert_eq!(parse_time_of_day("10:60"), None);
        assert_eq!(parse_time_of_day("0:30 AM"), None);
        assert_eq!(parse_time_of_day("13:00 PM"), None);
    }

    #[test]
    fn malformed_values_are_absent() {
        assert_eq!(parse_time_of_day(""), None);
        assert_eq!(parse_time_of_day("   "), None);
        assert_eq!(parse_time_of_day("noon"), None);
        assert_eq!(parse_time_of_day("9:5"), None);
        assert_eq!(parse_time_of_day("930"), None);
        assert_eq!(parse_time_of_day("+9:30"), None);
        assert_eq!(parse_time_of_day("9:30:00"), None);
        assert_eq!(parse_time_of_day("AM"), None);
    }
}
