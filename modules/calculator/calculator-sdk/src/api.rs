//! Calculator API trait
//!
//! Contract trait for the calculator. Integer operations use 32-bit
//! two's-complement semantics: `sum`, `subtract`, `multiply` and `power`
//! wrap on overflow instead of failing.

use crate::CalculatorError;

/// Calculator API trait
///
/// Every method is pure and synchronous. Implementations must be shareable
/// across threads (`Arc<dyn CalculatorClientV1>`).
pub trait CalculatorClientV1: Send + Sync {
    /// Add two numbers, wrapping on overflow.
    fn sum(&self, a: i32, b: i32) -> i32;

    /// Subtract `b` from `a`, wrapping on overflow.
    fn subtract(&self, a: i32, b: i32) -> i32;

    /// Multiply two numbers, wrapping on overflow.
    fn multiply(&self, a: i32, b: i32) -> i32;

    /// Integer quotient of `a / b`, truncated toward zero.
    ///
    /// # Errors
    /// Returns `CalculatorError::InvalidArgument` when `b == 0`.
    fn divide(&self, a: i32, b: i32) -> Result<i32, CalculatorError>;

    /// The larger of the two values.
    fn max(&self, a: i32, b: i32) -> i32;

    /// Non-negative square root of `x`.
    ///
    /// # Errors
    /// Returns `CalculatorError::InvalidArgument` when `x` is negative or NaN.
    fn square_root(&self, x: f64) -> Result<f64, CalculatorError>;

    /// `true` iff `x > 0`.
    fn is_positive(&self, x: i32) -> bool;

    /// `base` raised to `exponent`, wrapping on overflow. `power(0, 0) == 1`.
    ///
    /// # Errors
    /// Returns `CalculatorError::InvalidArgument` when `exponent < 0`.
    fn power(&self, base: i32, exponent: i32) -> Result<i32, CalculatorError>;
}
