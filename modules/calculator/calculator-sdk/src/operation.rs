use std::fmt;

use serde::{Deserialize, Serialize};

/// Name of a calculator operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Sum,
    Subtract,
    Multiply,
    Divide,
    Max,
    SquareRoot,
    IsPositive,
    Power,
}

impl Operation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sum => "sum",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Max => "max",
            Self::SquareRoot => "square-root",
            Self::IsPositive => "is-positive",
            Self::Power => "power",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
