//! Property-based tests for currency formatting.

use std::str::FromStr;

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::format::{format_abbreviated_currency, format_currency, round_half_away};

/// Amounts with two decimals, up to about a thousand crore either way.
fn any_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|paise| Decimal::new(paise, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Stripping separators and symbol gives back the rounded amount.
    #[test]
    fn prop_full_format_round_trips(amount in any_amount()) {
        let text = format_currency(Some(amount));
        let plain: String = text.chars().filter(|c| *c == '-' || c.is_ascii_digit()).collect();

        prop_assert_eq!(Decimal::from_str(&plain).unwrap(), round_half_away(amount, 0));
    }

    /// Indian grouping: the last group has three digits, every earlier
    /// group two, except a leading group of one or two.
    #[test]
    fn prop_full_format_groups(amount in any_amount()) {
        let text = format_currency(Some(amount));
        let digits = text.trim_start_matches('-').trim_start_matches('₹');
        let groups: Vec<&str> = digits.split(',').collect();

        let (last, rest) = groups.split_last().unwrap();
        if rest.is_empty() {
            prop_assert!(last.len() <= 3);
        } else {
            prop_assert_eq!(last.len(), 3);
            prop_assert!(rest[0].len() == 1 || rest[0].len() == 2);
            prop_assert!(rest[1..].iter().all(|g| g.len() == 2));
        }
    }

    /// Negative amounts that survive rounding carry the sign before the symbol.
    #[test]
    fn prop_full_format_sign(amount in any_amount()) {
        let text = format_currency(Some(amount));
        let negative = round_half_away(amount, 0) < Decimal::ZERO;
        prop_assert_eq!(text.starts_with("-₹"), negative);
    }

    /// The unit suffix follows the magnitude band.
    #[test]
    fn prop_abbreviated_band(amount in any_amount()) {
        let text = format_abbreviated_currency(Some(amount), true);
        let magnitude = amount.abs();

        prop_assert!(text.starts_with('₹'));
        if magnitude >= Decimal::from(10_000_000) {
            prop_assert!(text.ends_with(" Cr"));
        } else if magnitude >= Decimal::from(100_000) {
            prop_assert!(text.ends_with(" L"));
        } else if magnitude >= Decimal::from(1_000) {
            prop_assert!(text.ends_with('K'));
        } else {
            prop_assert!(text.chars().last().is_some_and(|c| c.is_ascii_digit()));
        }
    }

    /// Exactly two decimals in every band.
    #[test]
    fn prop_abbreviated_two_decimals(amount in any_amount(), symbol in any::<bool>()) {
        let text = format_abbreviated_currency(Some(amount), symbol);
        let number = text
            .trim_start_matches('₹')
            .trim_end_matches(" Cr")
            .trim_end_matches(" L")
            .trim_end_matches('K');
        let (_, fraction) = number.split_once('.').unwrap();

        prop_assert_eq!(fraction.len(), 2);
        prop_assert_eq!(text.starts_with('₹'), symbol);
    }
}
