//! Decimal helpers for monetary amounts.
//!
//! Amounts are normalized to [`AMOUNT_SCALE`] decimal places using banker's
//! rounding (round half to even), which keeps cumulative rounding bias at
//! zero across many conversions.

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;

/// Number of decimal places every monetary amount is normalized to.
pub const AMOUNT_SCALE: u32 = 4;

/// Rounds `amount` to [`AMOUNT_SCALE`] places and pads it to exactly that scale.
///
/// Padding is limited by the 96-bit mantissa: magnitudes above roughly
/// `7.9e24` cannot carry four decimal places and come back at the largest
/// scale that fits (`Decimal::MAX` keeps scale 0). The value is unchanged.
///
/// ```
/// use rust_decimal_macros::dec;
/// use cambio_core::currency::conversion::normalize;
///
/// assert_eq!(normalize(dec!(9)).to_string(), "9.0000");
/// assert_eq!(normalize(dec!(1.23456789)).to_string(), "1.2346");
/// ```
#[must_use]
pub fn normalize(amount: Decimal) -> Decimal {
    let mut normalized =
        amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointNearestEven);
    normalized.rescale(AMOUNT_SCALE);
    normalized
}

/// Multiplies `amount` by `rate`, returning `None` on overflow.
///
/// The product is left unrounded; callers normalize when reading it back.
#[must_use]
pub fn convert_amount(amount: Decimal, rate: Decimal) -> Option<Decimal> {
    amount.checked_mul(rate)
}
