//! Rounding rules shared by every reported figure.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places reported for averages, rates and GPAs.
pub const REPORTED_DECIMAL_PLACES: u32 = 2;

/// Rounds to two decimal places, midpoints away from zero.
///
/// A GPA of 3.565 reports as 3.57, never as 3.56.
pub fn round_reported(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(
        REPORTED_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_reported(dec("3.565")), dec("3.57"));
        assert_eq!(round_reported(dec("2.125")), dec("2.13"));
    }

    #[test]
    fn test_repeating_fraction_rounds_to_two_places() {
        let mean = dec("10.7") / Decimal::from(3);
        assert_eq!(round_reported(mean), dec("3.57"));
    }
}
