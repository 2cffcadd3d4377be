//! Indian Rupee display formatting.
//!
//! Rounding is half away from zero everywhere, so `2.345` shows as `2.35`
//! and `-0.5` as `-1` regardless of platform.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::transaction::parse_amount;

/// Rupee sign.
pub const RUPEE: &str = "₹";

const CRORE: Decimal = Decimal::from_parts(10_000_000, 0, 0, false, 0);
const LAKH: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);
const THOUSAND: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

/// Rounds to `dp` decimal places, midpoints away from zero.
#[must_use]
pub fn round_half_away(value: Decimal, dp: u32) -> Decimal {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    // Collapse a negative zero so it never renders as "-0".
    if rounded.is_zero() { Decimal::ZERO } else { rounded }
}

/// Full rupee amount with no decimals and Indian digit grouping.
///
/// A missing amount renders as `₹0.00`. Negative amounts put the minus
/// sign before the symbol: `-₹2,450`.
#[must_use]
pub fn format_currency(amount: Option<Decimal>) -> String {
    let Some(amount) = amount else {
        return format!("{RUPEE}0.00");
    };
    let rounded = round_half_away(amount, 0);
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    let digits = rounded.abs().trunc().normalize().to_string();
    format!("{sign}{RUPEE}{}", group_indian(&digits))
}

/// Compact form using crore (` Cr`), lakh (` L`) and thousand (`K`) units.
///
/// Always two decimals. The sign follows the symbol (`₹-2.45K`). A
/// missing amount renders as a bare `₹0`, or `0` without the symbol.
#[must_use]
pub fn format_abbreviated_currency(amount: Option<Decimal>, show_symbol: bool) -> String {
    let symbol = if show_symbol { RUPEE } else { "" };
    let Some(amount) = amount else {
        return format!("{symbol}0");
    };
    let magnitude = amount.abs();

    let (scaled, suffix) = if magnitude >= CRORE {
        (amount / CRORE, " Cr")
    } else if magnitude >= LAKH {
        (amount / LAKH, " L")
    } else if magnitude >= THOUSAND {
        (amount / THOUSAND, "K")
    } else {
        (amount, "")
    };

    let value = round_half_away(scaled, 2);
    format!("{symbol}{value:.2}{suffix}")
}

/// Like [`format_abbreviated_currency`] for raw text.
///
/// Text that does not parse as a number, `NaN` and the empty string
/// included, renders like a missing amount.
#[must_use]
pub fn format_abbreviated_str(amount: &str, show_symbol: bool) -> String {
    format_abbreviated_currency(parse_amount(amount).ok(), show_symbol)
}

/// Inserts Indian separators into a plain digit string: the last three
/// digits form one group, then every two digits.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut out = String::with_capacity(digits.len() + digits.len() / 2);
    let lead = head.len() % 2;
    if lead == 1 {
        out.push_str(&head[..1]);
    }
    for (i, pair) in head.as_bytes()[lead..].chunks(2).enumerate() {
        if i > 0 || lead == 1 {
            out.push(',');
        }
        out.push_str(std::str::from_utf8(pair).unwrap_or_default());
    }
    out.push(',');
    out.push_str(tail);
    out
}
