//! Currency rounding and formatting
//!
//! Amounts are billed in whole currency units; there is no minor unit.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to the nearest whole currency unit, halves away from zero.
pub fn round_currency(value: Decimal) -> i64 {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    // Decimal's mantissa is wider than i64; saturate past it.
    rounded.to_i64().unwrap_or(if rounded.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Treat an absent amount as zero and floor negatives to zero.
pub fn non_negative(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
}

/// Format a whole-unit amount with its currency code, e.g. `1500 INR`.
pub fn format_amount(amount: i64, currency: &str) -> String {
    format!("{} {}", amount, currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_currency(dec("99.5")), 100);
        assert_eq!(round_currency(dec("100.5")), 101);
        assert_eq!(round_currency(dec("-2.5")), -3);
        assert_eq!(round_currency(dec("1.49")), 1);
    }

    #[test]
    fn decimal_halves_are_exact() {
        // 1.005 * 100 is 100.49999... in binary floating point
        assert_eq!(round_currency(dec("1.005") * Decimal::ONE_HUNDRED), 101);
    }

    #[test]
    fn saturates_instead_of_panicking() {
        assert_eq!(round_currency(Decimal::MAX), i64::MAX);
        assert_eq!(round_currency(Decimal::MIN), i64::MIN);
    }

    #[test]
    fn non_negative_clamps_and_defaults() {
        assert_eq!(non_negative(None), Decimal::ZERO);
        assert_eq!(non_negative(Some(dec("-500"))), Decimal::ZERO);
        assert_eq!(non_negative(Some(dec("12.5"))), dec("12.5"));
    }

    #[test]
    fn format_amount_helper() {
        assert_eq!(format_amount(1500, "INR"), "1500 INR");
        assert_eq!(format_amount(0, "INR"), "0 INR");
    }
}
