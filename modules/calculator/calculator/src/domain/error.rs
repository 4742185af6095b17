use calculator_sdk::{CalculatorError, Operation};

/// Domain-level errors for calculator operations.
///
/// Every variant is an invalid-argument condition; overflow is never an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("division by zero: {dividend} / 0")]
    DivisionByZero { dividend: i32 },

    #[error("square root of negative number: {0}")]
    NegativeRadicand(f64),

    #[error("square root of NaN")]
    NotANumber,

    #[error("negative exponent: {base}^{exponent}")]
    NegativeExponent { base: i32, exponent: i32 },
}

impl DomainError {
    #[must_use]
    pub fn operation(&self) -> Operation {
        match self {
            Self::DivisionByZero { .. } => Operation::Divide,
            Self::NegativeRadicand(_) | Self::NotANumber => Operation::SquareRoot,
            Self::NegativeExponent { .. } => Operation::Power,
        }
    }
}

impl From<DomainError> for CalculatorError {
    fn from(e: DomainError) -> Self {
        Self::invalid_argument(e.operation(), e.to_string())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_invalid_argument() {
        let err: CalculatorError = DomainError::DivisionByZero { dividend: 10 }.into();
        assert_eq!(
            err,
            CalculatorError::invalid_argument(Operation::Divide, "division by zero: 10 / 0")
        );

        let err: CalculatorError = DomainError::NegativeRadicand(-3.0).into();
        assert_eq!(err.operation(), Operation::SquareRoot);

        let err: CalculatorError = DomainError::NegativeExponent {
            base: 3,
            exponent: -1,
        }
        .into();
        assert_eq!(err.operation(), Operation::Power);
        assert!(err.to_string().contains("3^-1"));
    }
}
