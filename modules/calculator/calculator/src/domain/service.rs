//! Domain service for calculator
//!
//! Exposes the arithmetic primitives through the SDK contract and logs
//! every call.

use calculator_sdk::{CalculatorClientV1, CalculatorError};
use tracing::{debug, warn};

use super::arithmetic;
use super::error::DomainError;

/// Domain service that performs calculator operations.
///
/// Stateless; one instance can be shared freely across threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct Service;

impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn rejected(e: DomainError) -> CalculatorError {
    warn!(operation = %e.operation(), error = %e, "rejected calculator input");
    e.into()
}

impl CalculatorClientV1 for Service {
    fn sum(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing addition");
        arithmetic::sum(a, b)
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing subtraction");
        arithmetic::subtract(a, b)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing multiplication");
        arithmetic::multiply(a, b)
    }

    fn divide(&self, a: i32, b: i32) -> Result<i32, CalculatorError> {
        debug!(a, b, "performing division");
        arithmetic::divide(a, b).map_err(rejected)
    }

    fn max(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "computing maximum");
        arithmetic::max(a, b)
    }

    fn square_root(&self, x: f64) -> Result<f64, CalculatorError> {
        debug!(x, "computing square root");
        arithmetic::square_root(x).map_err(rejected)
    }

    fn is_positive(&self, x: i32) -> bool {
        debug!(x, "checking sign");
        arithmetic::is_positive(x)
    }

    fn power(&self, base: i32, exponent: i32) -> Result<i32, CalculatorError> {
        debug!(base, exponent, "computing power");
        arithmetic::power(base, exponent).map_err(rejected)
    }
}
