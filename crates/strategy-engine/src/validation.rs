//! Amount Validation
//!
//! Checks user-typed investment amounts before they reach the engine.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;

/// Largest amount accepted in a single request
pub const MAX_AMOUNT: Decimal = dec!(1_000_000);

const MAX_AMOUNT_F64: f64 = 1_000_000.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount is required")]
    Required,

    #[error("Amount must be a number")]
    NotANumber,

    #[error("Amount must be greater than 0")]
    NotPositive,

    #[error("Amount is too large")]
    TooLarge,
}

/// Validate and parse an amount; the first failing rule wins
///
/// Accepts plain decimals ("50", "12.5") and scientific notation ("1e3").
/// Numbers too big for a `Decimal` still count as numbers and are reported
/// as too large.
pub fn validate_amount(input: &str) -> Result<Decimal, AmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AmountError::Required);
    }

    // Classify as f64 first: it overflows to infinity instead of failing
    let value: f64 = input.parse().map_err(|_| AmountError::NotANumber)?;
    if value.is_nan() {
        return Err(AmountError::NotANumber);
    }
    if value <= 0.0 {
        return Err(AmountError::NotPositive);
    }
    if value > MAX_AMOUNT_F64 {
        return Err(AmountError::TooLarge);
    }

    let amount = Decimal::from_str(input)
        .or_else(|_| Decimal::from_scientific(input))
        .ok()
        .or_else(|| Decimal::from_f64_retain(value))
        .ok_or(AmountError::NotANumber)?;

    if amount <= Decimal::ZERO {
        return Err(AmountError::NotPositive);
    }
    if amount > MAX_AMOUNT {
        return Err(AmountError::TooLarge);
    }

    Ok(amount)
}
