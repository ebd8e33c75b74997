use rust_decimal::{Decimal, RoundingStrategy};

/// Round to `dp` decimal places with ties toward positive infinity.
///
/// Equivalent to `floor(x * 10^dp + 0.5) / 10^dp`, so `2.5 -> 3` but
/// `-2.5 -> -2`. Every ledger amount and ROI figure goes through this rule.
/// Never overflows; `dp` beyond the value's scale returns it unchanged.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let strategy = if value.is_sign_negative() {
        RoundingStrategy::MidpointTowardZero
    } else {
        RoundingStrategy::MidpointAwayFromZero
    };
    value.round_dp_with_strategy(dp, strategy)
}
