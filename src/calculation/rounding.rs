//! Currency rounding.
//!
//! Every monetary intermediate is rounded to a whole currency unit before it
//! is summed into a total, so results reproduce exactly across runs.

use rust_decimal::Decimal;

const HALF: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Rounds to the nearest whole currency unit, halves rounding up.
///
/// Halves round toward positive infinity (`2.5 -> 3`, `-2.5 -> -2`).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(1575, 1)), Decimal::new(158, 0)); // 157.5
/// assert_eq!(round_currency(Decimal::new(15749, 2)), Decimal::new(157, 0)); // 157.49
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    (value + HALF).floor()
}
