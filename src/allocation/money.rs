//! Integer-cent money helpers.
//!
//! All remainder and total computations in the engine are performed in
//! integer minor units (cents) to eliminate floating-point drift.
//! Conversion to major units happens only at the boundary, when
//! constructing records to persist or display.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Integer minor units (cents).
pub type Cents = i64;

/// Converts a major-unit amount to integer cents.
///
/// Rounds half away from zero, applied uniformly across the engine.
///
/// # Examples
///
/// ```
/// use payroll_engine::allocation::to_minor_units;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(to_minor_units(Decimal::from_str("300.00").unwrap()), 30000);
/// assert_eq!(to_minor_units(Decimal::from_str("100.105").unwrap()), 10011);
/// ```
pub fn to_minor_units(amount: Decimal) -> Cents {
    let scaled = (amount * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    // Wage amounts never approach the i64 cent range; saturate rather than
    // panic if a corrupt value ever does.
    scaled.to_i64().unwrap_or(Cents::MAX)
}

/// Converts integer cents back to a major-unit amount with scale 2.
///
/// # Examples
///
/// ```
/// use payroll_engine::allocation::from_minor_units;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(from_minor_units(35000), Decimal::from_str("350.00").unwrap());
/// ```
pub fn from_minor_units(cents: Cents) -> Decimal {
    Decimal::new(cents, 2)
}

/// Clamps a cent value at zero, guarding against negative remainders from
/// data anomalies.
pub fn clamp_non_negative(n: Cents) -> Cents {
    n.max(0)
}
