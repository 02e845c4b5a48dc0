//! Display Rounding

use rust_decimal::{Decimal, RoundingStrategy};

/// Round `value` to `dp` places, halves away from zero
///
/// `Decimal`'s `{:.N}` formatting drops digits past `N`, so figures are
/// rounded here before they are printed.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_halves_round_up() {
        assert_eq!(format!("{:.2}", round_half_up(dec!(0.125), 2)), "0.13");
        assert_eq!(format!("{:.2}", round_half_up(dec!(2.675), 2)), "2.68");
        assert_eq!(format!("{:.4}", round_half_up(dec!(0.011369), 4)), "0.0114");
        assert_eq!(format!("{:.1}", round_half_up(dec!(4.25), 1)), "4.3");
    }

    #[test]
    fn test_negative_halves_round_away_from_zero() {
        assert_eq!(round_half_up(dec!(-0.125), 2), dec!(-0.13));
        assert_eq!(round_half_up(dec!(-1.004), 2), dec!(-1.00));
    }

    #[test]
    fn test_short_values_are_padded() {
        assert_eq!(format!("{:.2}", round_half_up(dec!(8.3), 2)), "8.30");
        assert_eq!(format!("{:.1}", round_half_up(dec!(15), 1)), "15.0");
    }
}
