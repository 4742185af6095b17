//! Pure arithmetic primitives.
//!
//! Integer operations follow 32-bit two's-complement semantics: results that
//! do not fit in an `i32` wrap around instead of failing.

use super::error::DomainError;

pub type DomainResult<T> = Result<T, DomainError>;

#[must_use]
pub fn sum(a: i32, b: i32) -> i32 {
    a.wrapping_add(b)
}

#[must_use]
pub fn subtract(a: i32, b: i32) -> i32 {
    a.wrapping_sub(b)
}

#[must_use]
pub fn multiply(a: i32, b: i32) -> i32 {
    a.wrapping_mul(b)
}

/// Quotient truncated toward zero. `i32::MIN / -1` wraps to `i32::MIN`.
///
/// # Errors
/// Returns `DomainError::DivisionByZero` when `b == 0`.
pub fn divide(a: i32, b: i32) -> DomainResult<i32> {
    if b == 0 {
        return Err(DomainError::DivisionByZero { dividend: a });
    }
    Ok(a.wrapping_div(b))
}

#[must_use]
pub fn max(a: i32, b: i32) -> i32 {
    a.max(b)
}

/// # Errors
/// Returns `DomainError::NegativeRadicand` for `x < 0` and
/// `DomainError::NotANumber` for NaN.
pub fn square_root(x: f64) -> DomainResult<f64> {
    if x.is_nan() {
        return Err(DomainError::NotANumber);
    }
    if x < 0.0 {
        return Err(DomainError::NegativeRadicand(x));
    }
    // sqrt(-0.0) is -0.0
    Ok(x.sqrt().abs())
}

#[must_use]
pub fn is_positive(x: i32) -> bool {
    x > 0
}

/// `base^exponent` with wraparound. Any base to the zeroth power is 1.
///
/// # Errors
/// Returns `DomainError::NegativeExponent` when `exponent < 0`.
pub fn power(base: i32, exponent: i32) -> DomainResult<i32> {
    let exp = u32::try_from(exponent)
        .map_err(|_| DomainError::NegativeExponent { base, exponent })?;
    Ok(base.wrapping_pow(exp))
}
