//! Monetary amounts at the edges of settlement.
//!
//! Stakes arrive as [`Money`] and are converted exactly into rationals.
//! Payouts stay exact until display, where [`to_currency`] rounds to pence.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;

use super::error::DomainError;

/// Money represented as a Decimal for precision.
pub type Money = Decimal;

/// Decimal places of a rendered currency amount.
pub const CURRENCY_SCALE: u32 = 2;

/// Exact rational value of a decimal amount.
#[must_use]
pub fn to_rational(amount: Money) -> BigRational {
    let denom = num_traits::pow(BigInt::from(10), amount.scale() as usize);
    BigRational::new(BigInt::from(amount.mantissa()), denom)
}

/// Round an exact amount to two decimal places, half away from zero.
///
/// # Errors
///
/// Returns [`DomainError::AmountOutOfRange`] if the amount does not fit in a
/// [`Decimal`].
pub fn to_currency(amount: &BigRational) -> Result<Money, DomainError> {
    let out_of_range = || DomainError::AmountOutOfRange {
        amount: amount.clone(),
    };

    let factor = BigRational::from_integer(num_traits::pow(
        BigInt::from(10),
        CURRENCY_SCALE as usize,
    ));
    let minor_units = (amount * factor).round().to_integer();
    let minor_units = minor_units.to_i128().ok_or_else(out_of_range)?;
    Decimal::try_from_i128_with_scale(minor_units, CURRENCY_SCALE).map_err(|_| out_of_range())
}
