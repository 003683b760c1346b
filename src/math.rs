//! Decimal math helpers shared across the projection pipeline
//!
//! All financial arithmetic in this crate is base-10 exact. Cents rounding
//! is applied at the points the pipeline specifies, never implicitly.

use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};

/// Round a decimal amount to cents (midpoints away from zero).
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Compound growth factor `(1 + rate)^periods`.
pub fn compound(rate: Decimal, periods: u32) -> Decimal {
    (Decimal::ONE + rate).powi(periods as i64)
}

/// Inflation factor for a 1-based projection year index.
/// Year 1 carries no inflation.
pub fn inflation_factor(rate: Decimal, year_index: u32) -> Decimal {
    compound(rate, year_index.saturating_sub(1))
}

/// Equivalent monthly rate for an annual effective rate:
/// `(1 + annual)^(1/12) - 1`.
pub fn annual_to_monthly(annual: Decimal) -> Decimal {
    (Decimal::ONE + annual).powf(1.0 / 12.0) - Decimal::ONE
}
