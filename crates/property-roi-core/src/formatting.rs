//! Display helpers for monetary amounts and percentages.
//!
//! These render values for people, not machines: serialized output keeps the
//! raw `Decimal` strings.

use rust_decimal::Decimal;

use crate::rounding::round_half_up;

/// Render an amount with comma thousands separators.
///
/// Only the integer part is grouped; fractional digits are kept after
/// dropping trailing zeros. `None` renders as an empty string.
pub fn format_number(value: Option<Decimal>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let value = if value.is_zero() {
        Decimal::ZERO
    } else {
        value.normalize()
    };
    group_thousands(&value.to_string())
}

/// Render a percentage figure (already scaled by 100) with a trailing `%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{}%", format_number(Some(value)))
}

/// Render a year count rounded to one decimal place.
pub fn format_years(value: Decimal) -> String {
    format_number(Some(round_half_up(value, 1)))
}

fn group_thousands(digits: &str) -> String {
    let (sign, unsigned) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };

    let mut out = String::with_capacity(digits.len() + int_part.len() / 3 + 1);
    out.push_str(sign);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}
