//! Rounding policy shared by every report.
//!
//! Amounts are exact decimals and round half-up (ties away from zero). Percentages are
//! reported as `f64` but computed in decimal space first so the rounding is exact.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Scale used for averages and percentages
pub const AMOUNT_SCALE: u32 = 2;

/// Scale used for growth and change ratios before they are multiplied by 100
pub const RATIO_SCALE: u32 = 4;

/// Round a decimal half-up to `dp` places
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}

/// `total / count` rounded to 2 places, 0 when there is nothing to average
pub fn average(total: Decimal, count: u64) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    round_half_up(total / Decimal::from(count), AMOUNT_SCALE)
}

/// `numerator / denominator * 100` rounded to 2 places, 0.0 when the denominator is zero
pub fn percentage(numerator: Decimal, denominator: Decimal) -> f64 {
    if denominator.is_zero() {
        return 0.0;
    }
    to_f64(round_half_up(
        numerator * Decimal::ONE_HUNDRED / denominator,
        AMOUNT_SCALE,
    ))
}

/// Count-based variant of [`percentage`]
pub fn count_percentage(part: u64, total: u64) -> f64 {
    percentage(Decimal::from(part), Decimal::from(total))
}

/// `numerator / denominator` rounded to 4 places, then multiplied by 100.
///
/// Returns `None` when the denominator is zero; callers decide what that means.
pub fn ratio_percentage(numerator: Decimal, denominator: Decimal) -> Option<f64> {
    if denominator.is_zero() {
        return None;
    }
    let ratio = round_half_up(numerator / denominator, RATIO_SCALE);
    Some(to_f64(ratio * Decimal::ONE_HUNDRED))
}

/// Relative change from `previous` to `current` as a percentage (4-place ratio)
pub fn change_percentage(current: Decimal, previous: Decimal) -> Option<f64> {
    ratio_percentage(current - previous, previous)
}

pub fn to_f64(value: Decimal) -> f64 {
    value.normalize().to_f64().unwrap_or(0.0)
}
