//! Monetary rounding policy.
//!
//! Every amount the engine returns passes through [`round_currency`] exactly
//! once, at the output boundary. Intermediate arithmetic keeps full decimal
//! precision.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places of the currency's smallest unit.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount half-up (midpoint away from zero) to the smallest
/// currency unit, padding the scale so `35000` is reported as `35000.00`.
///
/// # Examples
///
/// ```
/// use eosb_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("10.005").unwrap()).to_string(), "10.01");
/// assert_eq!(round_currency(Decimal::from(35000)).to_string(), "35000.00");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded =
        amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}
